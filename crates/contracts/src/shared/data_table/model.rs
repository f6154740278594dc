use super::column::{CellAlign, CellContent, ColumnDescriptor};
use super::pagination::{clamp_page, page_buttons, page_count, page_range, PageButton, PAGE_SIZE};
use super::row::TableRow;
use super::search::filter_rows;
use super::sort::{sort_rows, SortDirection};
use super::state::DataTableState;

pub const EMPTY_TITLE: &str = "No results found";
pub const EMPTY_HINT: &str = "Try adjusting your search or filter to find what you're looking for";

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub label: String,
    pub sortable: bool,
    pub align: CellAlign,
    /// Direction indicator when this column is the active sort column.
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub id: String,
    pub cells: Vec<CellContent>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// Skeleton rows shown while data is loading.
    Loading { placeholder_rows: usize },
    /// Nothing left after search.
    Empty,
    Rows(Vec<RenderedRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationModel {
    pub current_page: usize,
    pub total_pages: usize,
    pub buttons: Vec<PageButton>,
    /// Rows on the current page.
    pub shown: usize,
    /// Rows after search.
    pub total_results: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationModel {
    pub fn summary(&self) -> String {
        format!("Showing {} of {} results", self.shown, self.total_results)
    }
}

/// Everything the view layer needs to draw one frame of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTableModel {
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
    /// Present only when there is more than one page and data is loaded.
    pub pagination: Option<PaginationModel>,
    pub total_pages: usize,
    pub total_results: usize,
}

/// Search, then sort. The returned rows borrow from `rows`.
pub fn shape_rows<'a, R: TableRow>(rows: &'a [R], state: &DataTableState<R::Field>) -> Vec<&'a R> {
    let mut shaped = filter_rows(rows, &state.query);
    sort_rows(&mut shaped, &state.sort);
    shaped
}

/// Derives the render contract from the inputs and the current state.
///
/// The stored page is clamped into the valid range here, so a shrinking result
/// set never shows a page past the end. Without columns the table is header-only:
/// no body rows, no placeholders, no pagination.
pub fn build_model<R: TableRow>(
    rows: &[R],
    columns: &[ColumnDescriptor<R>],
    loading: bool,
    state: &DataTableState<R::Field>,
) -> DataTableModel {
    let headers = columns
        .iter()
        .map(|column| HeaderCell {
            label: column.label.clone(),
            sortable: column.sortable,
            align: column.align,
            sort: if column.sortable {
                state.sort.direction_for(column.field)
            } else {
                None
            },
        })
        .collect();

    if columns.is_empty() {
        return DataTableModel {
            headers,
            body: TableBody::Rows(Vec::new()),
            pagination: None,
            total_pages: 0,
            total_results: 0,
        };
    }

    if loading {
        return DataTableModel {
            headers,
            body: TableBody::Loading {
                placeholder_rows: PAGE_SIZE,
            },
            pagination: None,
            total_pages: 0,
            total_results: 0,
        };
    }

    let shaped = shape_rows(rows, state);
    let total_results = shaped.len();
    let total_pages = page_count(total_results, PAGE_SIZE);
    let current_page = clamp_page(state.page, total_pages);

    let page_rows: Vec<RenderedRow> = shaped[page_range(total_results, current_page, PAGE_SIZE)]
        .iter()
        .map(|row| RenderedRow {
            id: row.row_id().to_string(),
            cells: columns.iter().map(|column| column.render_cell(row)).collect(),
        })
        .collect();

    let pagination = (total_pages > 1).then(|| PaginationModel {
        current_page,
        total_pages,
        buttons: page_buttons(current_page, total_pages),
        shown: page_rows.len(),
        total_results,
        has_previous: current_page > 1,
        has_next: current_page < total_pages,
    });

    let body = if page_rows.is_empty() {
        TableBody::Empty
    } else {
        TableBody::Rows(page_rows)
    };

    DataTableModel {
        headers,
        body,
        pagination,
        total_pages,
        total_results,
    }
}

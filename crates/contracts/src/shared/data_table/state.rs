use super::column::ColumnDescriptor;
use super::pagination::clamp_page;
use super::row::TableRow;
use super::sort::SortState;

/// Interaction state owned by one data table instance.
///
/// Total pages are never stored here; they are derived from the row count on
/// every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTableState<F> {
    pub query: String,
    pub sort: SortState<F>,
    /// 1-based.
    pub page: usize,
}

impl<F> Default for DataTableState<F> {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortState::Unsorted,
            page: 1,
        }
    }
}

impl<F: Copy + Eq> DataTableState<F> {
    /// Updates the search query. A changed query starts again from page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.page = 1;
        }
    }

    /// Header click. Returns `false` for columns that are not sortable.
    pub fn toggle_sort<R>(&mut self, column: &ColumnDescriptor<R>) -> bool
    where
        R: TableRow<Field = F>,
    {
        if !column.sortable {
            return false;
        }
        self.sort = self.sort.toggled(column.field);
        true
    }

    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.page = clamp_page(page, total_pages);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.go_to_page(self.page.saturating_add(1), total_pages);
    }

    pub fn previous_page(&mut self, total_pages: usize) {
        self.go_to_page(self.page.saturating_sub(1), total_pages);
    }
}

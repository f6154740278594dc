//! Searchable, sortable, paginated table over any [`TableRow`] collection.
//!
//! ```text
//! <DataTable
//!     rows=orders
//!     columns=order_columns()
//!     loading=loading
//!     search_placeholder="Search orders..."
//! />
//! ```
//!
//! The component owns its [`DataTableState`]; everything it draws comes from
//! [`build_model`], recomputed whenever rows, loading flag or state change.

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellContent};
use crate::shared::icons::{ui_icon, UiIcon};
use crate::shared::list_utils::SearchInput;
use contracts::shared::data_table::{
    build_model, CellAlign, ColumnDescriptor, DataTableState, TableBody as BodyModel,
    TableRow as RowSource, EMPTY_HINT, EMPTY_TITLE,
};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DataTable<R>(
    /// Rows to display; replacing them resets search, sort and page
    #[prop(into)]
    rows: Signal<Vec<R>>,

    /// Columns in display order
    columns: Vec<ColumnDescriptor<R>>,

    /// While true the body shows a page of skeleton rows
    #[prop(into)]
    loading: Signal<bool>,

    #[prop(optional, into)]
    search_placeholder: String,
) -> impl IntoView
where
    R: RowSource + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(DataTableState::<R::Field>::default());
    let columns = StoredValue::new(columns);

    Effect::new(move |prev: Option<()>| {
        rows.track();
        if prev.is_some() {
            log::debug!("data table: rows replaced, resetting state");
            state.set(DataTableState::default());
        }
    });

    let model = Memo::new(move |_| {
        let loading = loading.get();
        state.with(|state| {
            rows.with(|rows| columns.with_value(|columns| build_model(rows, columns, loading, state)))
        })
    });

    let toggle_sort = move |index: usize| {
        columns.with_value(|columns| {
            let Some(column) = columns.get(index) else {
                return;
            };
            state.update(|state| {
                if state.toggle_sort(column) {
                    log::debug!("data table: sort -> {:?}", state.sort);
                }
            });
        });
    };

    let go_to_page = Callback::new(move |page: usize| {
        let total_pages = model.with_untracked(|m| m.total_pages);
        state.update(|state| state.go_to_page(page, total_pages));
        log::debug!("data table: page -> {}", state.with_untracked(|s| s.page));
    });

    let previous_page = Callback::new(move |_: ()| {
        let total_pages = model.with_untracked(|m| m.total_pages);
        state.update(|state| state.previous_page(total_pages));
        log::debug!("data table: page -> {}", state.with_untracked(|s| s.page));
    });

    let next_page = Callback::new(move |_: ()| {
        let total_pages = model.with_untracked(|m| m.total_pages);
        state.update(|state| state.next_page(total_pages));
        log::debug!("data table: page -> {}", state.with_untracked(|s| s.page));
    });

    let on_search = Callback::new(move |query: String| {
        state.update(|state| state.set_query(query));
    });

    let headers_view = move || {
        model
            .with(|m| m.headers.clone())
            .into_iter()
            .enumerate()
            .map(|(index, header)| {
                view! {
                    <SortableHeaderCell
                        label=header.label
                        sortable=header.sortable
                        direction=header.sort
                        align=header.align
                        on_sort=Callback::new(move |_: ()| toggle_sort(index))
                    />
                }
            })
            .collect_view()
    };

    let body_view = move || {
        let (body, aligns) = model.with(|m| {
            (
                m.body.clone(),
                m.headers.iter().map(|h| h.align).collect::<Vec<_>>(),
            )
        });
        render_body(body, &aligns)
    };

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.query.clone()))
                    on_change=on_search
                    placeholder=search_placeholder
                />
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>{headers_view}</TableRow>
                    </TableHeader>
                    <TableBody>{body_view}</TableBody>
                </Table>
            </div>

            {move || {
                model.with(|m| m.pagination.clone()).map(|pagination| {
                    view! {
                        <PaginationControls
                            pagination=pagination
                            on_page_change=go_to_page
                            on_previous=previous_page
                            on_next=next_page
                        />
                    }
                })
            }}
        </div>
    }
}

fn render_body(body: BodyModel, aligns: &[CellAlign]) -> AnyView {
    match body {
        BodyModel::Loading { placeholder_rows } => {
            let columns = aligns.len().max(1);
            (0..placeholder_rows)
                .map(|_| {
                    view! {
                        <TableRow>
                            {(0..columns)
                                .map(|_| view! {
                                    <TableCell>
                                        <div class="skeleton skeleton--text"></div>
                                    </TableCell>
                                })
                                .collect_view()}
                        </TableRow>
                    }
                })
                .collect_view()
                .into_any()
        }
        BodyModel::Empty => {
            let span = colspan(aligns);
            view! {
                <TableRow>
                    <TableCell attr:colspan=span>
                        <div class="data-table__empty">
                            <div class="data-table__empty-icon">{ui_icon(UiIcon::Search)}</div>
                            <p class="data-table__empty-title">{EMPTY_TITLE}</p>
                            <p class="data-table__empty-hint">{EMPTY_HINT}</p>
                        </div>
                    </TableCell>
                </TableRow>
            }
            .into_any()
        }
        BodyModel::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                let cells = row
                    .cells
                    .into_iter()
                    .enumerate()
                    .map(|(i, content)| {
                        let align = aligns.get(i).copied().unwrap_or_default();
                        view! { <TableCellContent content=content align=align /> }
                    })
                    .collect_view();
                view! { <TableRow attr:data-row-id=row.id>{cells}</TableRow> }
            })
            .collect_view()
            .into_any(),
    }
}

/// The empty-state cell spans the whole table, at least one column.
fn colspan(aligns: &[CellAlign]) -> String {
    aligns.len().max(1).to_string()
}

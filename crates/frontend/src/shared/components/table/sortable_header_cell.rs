//! Sortable table header cell
//!
//! ```text
//! <SortableHeaderCell
//!     label="Amount"
//!     sortable=true
//!     direction=Some(SortDirection::Ascending)
//!     align=CellAlign::Right
//!     on_sort=Callback::new(move |_| toggle_sort(index))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::data_table::{CellAlign, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Header cell that cycles its column through ascending, descending and unsorted.
///
/// Non-sortable columns render the label only and ignore clicks.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Column may be sorted
    #[prop(optional, default = true)]
    sortable: bool,

    /// Direction when this column is the active sort column, `None` otherwise
    direction: Option<SortDirection>,

    /// Called when a sortable header is clicked
    on_sort: Callback<()>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    #[prop(optional)]
    align: CellAlign,
) -> impl IntoView {
    let style = header_style(align, sortable);
    let sort_attr = aria_sort(direction);

    let handle_click = move |_| {
        if sortable {
            on_sort.run(());
        }
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style=style
                aria-sort=sort_attr
                on:click=handle_click
            >
                {label}
                {sortable.then(|| view! {
                    <span class=get_sort_class(direction)>{get_sort_indicator(direction)}</span>
                })}
            </div>
        </TableHeaderCell>
    }
}

fn header_style(align: CellAlign, sortable: bool) -> &'static str {
    match (align, sortable) {
        (CellAlign::Right, true) => "cursor: pointer; justify-content: flex-end; padding-right: 12px;",
        (CellAlign::Right, false) => "justify-content: flex-end; padding-right: 12px;",
        (CellAlign::Left, true) => "cursor: pointer; padding-right: 12px;",
        (CellAlign::Left, false) => "padding-right: 12px;",
    }
}

fn aria_sort(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    }
}

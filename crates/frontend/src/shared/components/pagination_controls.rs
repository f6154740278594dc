use crate::shared::icons::{ui_icon, UiIcon};
use contracts::shared::data_table::{PageButton, PaginationModel};
use leptos::prelude::*;

/// Previous/next buttons around a windowed strip of page numbers.
///
/// `on_page_change` receives a 1-based page number; the owner clamps it.
#[component]
pub fn PaginationControls(
    pagination: PaginationModel,

    /// Callback when a page number is clicked
    on_page_change: Callback<usize>,

    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let current = pagination.current_page;
    let summary = pagination.summary();

    let buttons = pagination
        .buttons
        .iter()
        .map(|button| match *button {
            PageButton::Page(page) => view! {
                <button
                    class="pagination-btn pagination-btn--page"
                    class:pagination-btn--active={page == current}
                    aria-current={(page == current).then_some("page")}
                    on:click=move |_| on_page_change.run(page)
                >
                    {page}
                </button>
            }
            .into_any(),
            PageButton::Ellipsis => view! {
                <span class="pagination-ellipsis">"..."</span>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{summary}</span>
            <div class="pagination-controls__buttons">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_previous.run(())
                    disabled={!pagination.has_previous}
                    title="Previous page"
                >
                    {ui_icon(UiIcon::ChevronLeft)}
                </button>
                {buttons}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_next.run(())
                    disabled={!pagination.has_next}
                    title="Next page"
                >
                    {ui_icon(UiIcon::ChevronRight)}
                </button>
            </div>
        </div>
    }
}

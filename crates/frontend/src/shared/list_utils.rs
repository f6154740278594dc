//! Shared list helpers: search input and sort indicators
use crate::shared::icons::{ui_icon, UiIcon};
use contracts::shared::data_table::SortDirection;
use leptos::prelude::*;

/// Search box with a leading magnifier and a clear button.
///
/// Every keystroke is reported; filtering is cheap enough to run on each one.
#[component]
pub fn SearchInput(
    /// Current query (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new query
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let clear_filter = move |_| on_change.run(String::new());

    view! {
        <div class="search-input">
            <span class="search-input__icon">{ui_icon(UiIcon::Search)}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {ui_icon(UiIcon::Close)}
                </button>
            </Show>
        </div>
    }
}

/// Indicator shown next to a sortable header
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::{ui_icon, UiIcon};
use contracts::dashboards::d100_store_overview::{
    next_hidden_card, toggle_card, visible_cards, StatCardMeta,
};
use leptos::prelude::*;

/// Grid of the selected stat cards plus an "Add Metric" tile while any card is hidden.
#[component]
pub fn StatsGrid(
    cards: Vec<StatCardMeta>,
    /// Initially visible card ids
    selected: Vec<u32>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    let cards = StoredValue::new(cards);
    let selected = RwSignal::new(selected);

    let hide_card = Callback::new(move |id: u32| {
        selected.update(|ids| toggle_card(ids, id));
        log::debug!("stats grid: hid card {}", id);
    });

    let add_metric = move |_| {
        let next = cards.with_value(|cards| selected.with(|ids| next_hidden_card(cards, ids)));
        if let Some(id) = next {
            selected.update(|ids| toggle_card(ids, id));
            log::debug!("stats grid: added card {}", id);
        }
    };

    let has_hidden = move || {
        cards.with_value(|cards| selected.with(|ids| next_hidden_card(cards, ids).is_some()))
    };

    let cards_view = move || {
        let shown: Vec<StatCardMeta> = cards.with_value(|cards| {
            selected.with(|ids| visible_cards(cards, ids).into_iter().cloned().collect())
        });
        shown
            .into_iter()
            .enumerate()
            .map(|(index, card)| {
                view! { <StatCard card=card index=index loading=loading on_hide=hide_card /> }
            })
            .collect_view()
    };

    view! {
        <div class="stats-grid">
            {cards_view}
            <Show when=has_hidden>
                <button class="stats-grid__add" on:click=add_metric>
                    <span class="stats-grid__add-icon">{ui_icon(UiIcon::Plus)}</span>
                    <span class="stats-grid__add-label">"Add Metric"</span>
                </button>
            </Show>
        </div>
    }
}

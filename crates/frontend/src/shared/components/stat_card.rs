use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::table::format_number_with_decimals;
use crate::shared::icons::{icon, ui_icon, UiIcon};
use contracts::dashboards::d100_store_overview::{StatCardMeta, Trend};
use leptos::prelude::*;

/// Prefix, grouped value and suffix, e.g. `$84,325` or `4.8/5`.
pub fn format_stat_value(card: &StatCardMeta) -> String {
    format!(
        "{}{}{}",
        card.prefix,
        format_number_with_decimals(card.value, card.decimals),
        card.suffix
    )
}

/// Absolute change without trailing zeros: `24.5%`, `12%`.
fn format_change(pct: f64) -> String {
    format!("{}%", pct.abs())
}

#[component]
pub fn StatCard(
    card: StatCardMeta,
    /// Position in the grid, drives the appear delay
    #[prop(optional)]
    index: usize,
    #[prop(into)]
    loading: Signal<bool>,
    /// "Hide this card" menu action
    #[prop(optional, into)]
    on_hide: Option<Callback<u32>>,
) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let card_id = card.id;
    let accent_class = format!("stat-card__icon stat-card__icon--{}", card.accent.as_str());
    let value_text = format_stat_value(&card);
    let title = card.title.clone();
    let icon_kind = card.icon;

    let change_view = card.trend().zip(card.percent_change).map(|(trend, pct)| {
        let (arrow, cls) = match trend {
            Trend::Up => (UiIcon::ArrowUpRight, "stat-card__change stat-card__change--up"),
            Trend::Down => (UiIcon::ArrowDownRight, "stat-card__change stat-card__change--down"),
        };
        view! {
            <div class="stat-card__footer">
                <span class=cls>{ui_icon(arrow)}{format_change(pct)}</span>
                <span class="stat-card__period">"from last month"</span>
            </div>
        }
    });

    let menu_view = on_hide.map(|on_hide| {
        view! {
            <div class="stat-card__menu">
                <button
                    class="stat-card__menu-toggle"
                    title="More options"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {ui_icon(UiIcon::MoreHorizontal)}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="stat-card__menu-list">
                        <button
                            class="stat-card__menu-item"
                            on:click=move |_| {
                                menu_open.set(false);
                                on_hide.run(card_id);
                            }
                        >
                            "Hide this card"
                        </button>
                    </div>
                </Show>
            </div>
        }
    });

    view! {
        <CardAnimated class="stat-card" delay_ms={index as u32 * 100}>
            {move || if loading.get() {
                view! {
                    <div class="stat-card__skeleton">
                        <div class="skeleton skeleton--circle"></div>
                        <div class="skeleton skeleton--text"></div>
                        <div class="skeleton skeleton--title"></div>
                        <div class="skeleton skeleton--text skeleton--short"></div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
            <div class="stat-card__body" class:stat-card__body--hidden=move || loading.get()>
                <div class="stat-card__header">
                    <div class=accent_class>{icon(icon_kind)}</div>
                    {menu_view}
                </div>
                <div class="stat-card__label">{title}</div>
                <div class="stat-card__value">{value_text}</div>
                {change_view}
            </div>
        </CardAnimated>
    }
}

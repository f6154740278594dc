use crate::dashboards::StoreOverviewDashboard;
use contracts::dashboards::d100_store_overview::{load_config, DashboardConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The dataset is embedded; a broken file still renders an empty dashboard.
    let config = load_config().unwrap_or_else(|err| {
        log::error!("Failed to load dashboard configuration: {:#}", err);
        DashboardConfig::default()
    });
    log::info!(
        "Dashboard configuration: {} stat cards, {} orders",
        config.stat_cards.len(),
        config.orders.len()
    );

    view! {
        <main class="app-main">
            <StoreOverviewDashboard config=config />
        </main>
    }
}

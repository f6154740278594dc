use super::activity_feed::ActivityFeed;
use super::recent_orders::RecentOrders;
use super::stats_grid::StatsGrid;
use super::todo_list::TodoList;
use crate::shared::components::page_header::PageHeader;
use contracts::dashboards::d100_store_overview::DashboardConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// E-commerce store overview: KPI cards, recent orders, activity and tasks.
#[component]
pub fn StoreOverviewDashboard(config: DashboardConfig) -> impl IntoView {
    let DashboardConfig {
        loading_delay_ms,
        default_visible_stats,
        stat_cards,
        orders,
        todos,
        activities,
    } = config;

    let (loading, set_loading) = signal(true);

    // Simulated fetch
    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(loading_delay_ms).await;
            set_loading.set(false);
            log::debug!("store overview: loading finished after {} ms", loading_delay_ms);
        });
    });

    view! {
        <div class="dashboard">
            <PageHeader
                title="E-commerce Dashboard"
                subtitle={"Welcome back! Here's an overview of your store's performance.".to_string()}
            />
            <StatsGrid cards=stat_cards selected=default_visible_stats loading=loading />
            <RecentOrders orders=orders loading=loading />
            <div class="dashboard__row">
                <ActivityFeed activities=activities loading=loading />
                <TodoList items=todos loading=loading />
            </div>
        </div>
    }
}

use crate::dashboards::d100_store_overview::columns::order_columns;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use contracts::dashboards::d100_store_overview::OrderDto;
use leptos::prelude::*;

#[component]
pub fn RecentOrders(
    orders: Vec<OrderDto>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    let orders = RwSignal::new(orders);

    view! {
        <CardAnimated class="recent-orders" delay_ms=300>
            <PageHeader
                title="Recent Orders"
                subtitle={"Track and manage your latest customer orders".to_string()}
                compact=true
            />
            <DataTable
                rows=orders
                columns=order_columns()
                loading=loading
                search_placeholder="Search orders..."
            />
        </CardAnimated>
    }
}

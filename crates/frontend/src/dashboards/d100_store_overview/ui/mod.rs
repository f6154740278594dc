pub mod activity_feed;
pub mod dashboard;
pub mod recent_orders;
pub mod stats_grid;
pub mod todo_list;

pub use dashboard::StoreOverviewDashboard;

pub mod activity;
pub mod config;
pub mod orders;
pub mod stats;
pub mod todos;

pub use activity::{filter_activities, ActivityFilter, ActivityItem, ActivityKind};
pub use config::{load_config, DashboardConfig};
pub use orders::{OrderDto, OrderField, OrderStatus, ShippingMethod};
pub use stats::{next_hidden_card, toggle_card, visible_cards, Accent, IconKind, StatCardMeta, StatCategory, Trend};
pub use todos::{due_label, filter_todos, new_todo, toggle_completed, TodoFilter, TodoItem, TodoPriority};

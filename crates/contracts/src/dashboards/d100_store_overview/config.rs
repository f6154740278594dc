use super::activity::ActivityItem;
use super::orders::OrderDto;
use super::stats::StatCardMeta;
use super::todos::TodoItem;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything the store overview page renders, passed to it explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Length of the simulated loading phase after mount.
    #[serde(default = "default_loading_delay_ms")]
    pub loading_delay_ms: u32,
    /// Stat cards shown on first render.
    #[serde(default = "default_visible_stats")]
    pub default_visible_stats: Vec<u32>,
    #[serde(default)]
    pub stat_cards: Vec<StatCardMeta>,
    #[serde(default)]
    pub orders: Vec<OrderDto>,
    #[serde(default)]
    pub todos: Vec<TodoItem>,
    #[serde(default)]
    pub activities: Vec<ActivityItem>,
}

fn default_loading_delay_ms() -> u32 {
    1500
}

fn default_visible_stats() -> Vec<u32> {
    vec![1, 4, 7, 9, 11]
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: default_loading_delay_ms(),
            default_visible_stats: Vec::new(),
            stat_cards: Vec::new(),
            orders: Vec::new(),
            todos: Vec::new(),
            activities: Vec::new(),
        }
    }
}

/// Default dataset embedded in the binary
const DEFAULT_CONFIG: &str = include_str!("../../../data/dashboard.toml");

impl DashboardConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: DashboardConfig =
            toml::from_str(contents).context("failed to parse dashboard configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Ids must be unique and default cards must exist.
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut order_ids = HashSet::new();
        for order in &self.orders {
            if !order_ids.insert(order.id.as_str()) {
                bail!("duplicate order id: {}", order.id);
            }
        }

        let mut card_ids = HashSet::new();
        for card in &self.stat_cards {
            if !card_ids.insert(card.id) {
                bail!("duplicate stat card id: {}", card.id);
            }
        }

        let mut todo_ids = HashSet::new();
        for todo in &self.todos {
            if !todo_ids.insert(todo.id.as_str()) {
                bail!("duplicate todo id: {}", todo.id);
            }
        }

        let mut activity_ids = HashSet::new();
        for activity in &self.activities {
            if !activity_ids.insert(activity.id.as_str()) {
                bail!("duplicate activity id: {}", activity.id);
            }
        }

        for id in &self.default_visible_stats {
            if !card_ids.contains(id) {
                bail!("default_visible_stats references unknown stat card id: {}", id);
            }
        }

        Ok(())
    }
}

/// Load the embedded dashboard dataset
pub fn load_config() -> anyhow::Result<DashboardConfig> {
    DashboardConfig::from_toml(DEFAULT_CONFIG).context("embedded dashboard.toml is invalid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_store_overview::orders::{OrderStatus, ShippingMethod};
    use crate::dashboards::d100_store_overview::activity::ActivityKind;
    use crate::dashboards::d100_store_overview::stats::IconKind;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.loading_delay_ms, 1500);
        assert_eq!(config.default_visible_stats, vec![1, 4, 7, 9, 11]);
        assert_eq!(config.stat_cards.len(), 15);
        assert_eq!(config.orders.len(), 12);
        assert_eq!(config.todos.len(), 5);
        assert_eq!(config.activities.len(), 7);

        let first = &config.orders[0];
        assert_eq!(first.id, "ORD-9385");
        assert_eq!(first.customer, "Emma Thompson");
        assert_eq!(first.status, OrderStatus::Completed);
        assert_eq!(first.shipping, ShippingMethod::Express);
        assert_eq!(first.date.to_string(), "2025-04-15");

        let done = &config.todos[3];
        assert_eq!(done.id, "todo-4");
        assert!(done.completed);
        assert_eq!(done.due_date.map(|d| d.to_string()).as_deref(), Some("2025-04-15"));
        assert_eq!(config.activities[2].kind, ActivityKind::Warning);

        assert!(config
            .stat_cards
            .iter()
            .all(|card| card.icon != IconKind::Unknown));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = DashboardConfig::from_toml("default_visible_stats = []").unwrap();
        assert_eq!(config.loading_delay_ms, 1500);
        assert!(config.orders.is_empty());
        assert!(config.stat_cards.is_empty());
        assert!(config.todos.is_empty());
        assert!(config.activities.is_empty());
    }

    #[test]
    fn test_duplicate_order_id_rejected() {
        let toml = r#"
default_visible_stats = []

[[orders]]
id = "ORD-1"
customer = "A"
email = "a@example.com"
amount = 1.0
status = "completed"
date = "2025-04-01"
items = 1
shipping = "standard"

[[orders]]
id = "ORD-1"
customer = "B"
email = "b@example.com"
amount = 2.0
status = "failed"
date = "2025-04-02"
items = 1
shipping = "express"
"#;
        let err = DashboardConfig::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate order id: ORD-1"));
    }

    #[test]
    fn test_duplicate_todo_id_rejected() {
        let toml = r#"
default_visible_stats = []

[[todos]]
id = "todo-1"
title = "Review inventory levels"
priority = "high"

[[todos]]
id = "todo-1"
title = "Update shipping rates"
priority = "low"
"#;
        let err = DashboardConfig::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate todo id: todo-1"));
    }

    #[test]
    fn test_unknown_default_card_rejected() {
        let err = DashboardConfig::from_toml("default_visible_stats = [42]").unwrap_err();
        assert!(err.to_string().contains("unknown stat card id: 42"));
    }

    #[test]
    fn test_malformed_document_reports_context() {
        let err = DashboardConfig::from_toml("orders = 5").unwrap_err();
        assert_eq!(err.to_string(), "failed to parse dashboard configuration");
    }
}

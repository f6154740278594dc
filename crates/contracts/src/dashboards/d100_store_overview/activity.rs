use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Success,
    Warning,
    Error,
    Info,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Success => "success",
            ActivityKind::Warning => "warning",
            ActivityKind::Error => "error",
            ActivityKind::Info => "info",
        }
    }
}

/// One event in the "Recent Activity" feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    /// Relative time as shown, e.g. "15 minutes ago"
    pub time: String,
}

/// Feed tabs. Only success and warning events get a tab of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityFilter {
    #[default]
    All,
    Kind(ActivityKind),
}

impl ActivityFilter {
    pub const TABS: [ActivityFilter; 3] = [
        ActivityFilter::All,
        ActivityFilter::Kind(ActivityKind::Success),
        ActivityFilter::Kind(ActivityKind::Warning),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityFilter::All => "All",
            ActivityFilter::Kind(ActivityKind::Success) => "Success",
            ActivityFilter::Kind(ActivityKind::Warning) => "Alerts",
            ActivityFilter::Kind(ActivityKind::Error) => "Errors",
            ActivityFilter::Kind(ActivityKind::Info) => "Info",
        }
    }

    pub fn matches(&self, item: &ActivityItem) -> bool {
        match self {
            ActivityFilter::All => true,
            ActivityFilter::Kind(kind) => item.kind == *kind,
        }
    }
}

pub fn filter_activities(items: &[ActivityItem], filter: ActivityFilter) -> Vec<ActivityItem> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, kind: ActivityKind) -> ActivityItem {
        ActivityItem {
            id: id.to_string(),
            kind,
            title: "New order received".to_string(),
            description: "Order #12345".to_string(),
            time: "2 minutes ago".to_string(),
        }
    }

    #[test]
    fn test_tabs_and_labels() {
        let labels: Vec<&str> = ActivityFilter::TABS.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["All", "Success", "Alerts"]);
    }

    #[test]
    fn test_filter_by_kind() {
        let items = vec![
            item("1", ActivityKind::Success),
            item("2", ActivityKind::Info),
            item("3", ActivityKind::Warning),
            item("4", ActivityKind::Success),
            item("5", ActivityKind::Error),
        ];
        assert_eq!(filter_activities(&items, ActivityFilter::All).len(), 5);

        let ids: Vec<String> = filter_activities(&items, ActivityFilter::Kind(ActivityKind::Success))
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, ["1", "4"]);

        let alerts = filter_activities(&items, ActivityFilter::Kind(ActivityKind::Warning));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "3");
    }

    #[test]
    fn test_kind_deserializes_from_type_key() {
        let parsed: ActivityItem = toml::from_str(
            r#"
id = "5"
type = "error"
title = "Failed delivery"
description = "Order #12342 delivery attempt failed"
time = "1 hour ago"
"#,
        )
        .unwrap();
        assert_eq!(parsed.kind, ActivityKind::Error);
        assert_eq!(parsed.kind.as_str(), "error");
    }
}

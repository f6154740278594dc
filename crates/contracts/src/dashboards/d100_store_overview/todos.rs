use crate::shared::data_table::BadgeTone;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoPriority {
    High,
    Medium,
    Low,
}

impl TodoPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoPriority::High => "high",
            TodoPriority::Medium => "medium",
            TodoPriority::Low => "low",
        }
    }

    pub fn badge_tone(&self) -> BadgeTone {
        match self {
            TodoPriority::High => BadgeTone::Error,
            TodoPriority::Medium => BadgeTone::Warning,
            TodoPriority::Low => BadgeTone::Success,
        }
    }
}

/// One entry of the "To-Do List" card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: TodoPriority,
    #[serde(default)]
    pub completed: bool,
    /// Due date (YYYY-MM-DD)
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl TodoItem {
    /// Past due and still open.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }
}

/// Tabs above the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TodoFilter {
    pub const TABS: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Pending, TodoFilter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Pending => "Pending",
            TodoFilter::Completed => "Completed",
        }
    }

    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Pending => !item.completed,
            TodoFilter::Completed => item.completed,
        }
    }
}

pub fn filter_todos(items: &[TodoItem], filter: TodoFilter) -> Vec<TodoItem> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// "Today", "Tomorrow", otherwise short month and day ("Apr 18").
pub fn due_label(due: NaiveDate, today: NaiveDate) -> String {
    if due == today {
        "Today".to_string()
    } else if today.checked_add_days(Days::new(1)) == Some(due) {
        "Tomorrow".to_string()
    } else {
        due.format("%b %-d").to_string()
    }
}

/// Flips `completed` on the item with `id`; returns false when no item matches.
pub fn toggle_completed(items: &mut [TodoItem], id: &str) -> bool {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.completed = !item.completed;
            true
        }
        None => false,
    }
}

/// Builds a pending medium-priority task from user input.
///
/// Returns `None` for blank titles. The id continues the `todo-N` sequence.
pub fn new_todo(title: &str, existing: &[TodoItem]) -> Option<TodoItem> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    let next = existing
        .iter()
        .filter_map(|item| item.id.strip_prefix("todo-")?.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
        + 1;

    Some(TodoItem {
        id: format!("todo-{}", next),
        title: title.to_string(),
        description: None,
        priority: TodoPriority::Medium,
        completed: false,
        due_date: None,
    })
}

//! Utilities for date formatting
use chrono::{Datelike, NaiveDate};

/// Format a date as M/D/YYYY without zero padding
/// Example: 2025-04-05 -> "4/5/2025"
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

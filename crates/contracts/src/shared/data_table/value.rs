use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// Scalar value of one row field, as seen by search, sort and default cell rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Missing value. Never matches a search query and sorts first.
    Empty,
    Text(String),
    Integer(i64),
    Number(f64),
    /// Calendar date (displayed as `YYYY-MM-DD`).
    Date(NaiveDate),
}

impl FieldValue {
    /// Lowercased string form used for free-text search.
    ///
    /// `Empty` has no searchable form.
    pub fn search_text(&self) -> Option<String> {
        match self {
            FieldValue::Empty => None,
            other => Some(other.to_string().to_lowercase()),
        }
    }

    /// Whether the value contains an already lowercased needle.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.search_text()
            .map(|text| text.contains(needle))
            .unwrap_or(false)
    }

    /// Natural ordering: numbers numerically, dates chronologically,
    /// text by plain ordinal (byte-wise) comparison.
    ///
    /// Values of different kinds are ordered by kind so the ordering stays total:
    /// empty < numbers < dates < text.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Empty, FieldValue::Empty) => Ordering::Equal,
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.kind_rank().cmp(&b.kind_rank()),
            },
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(v) => Some(*v as f64),
            FieldValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Empty => 0,
            FieldValue::Integer(_) | FieldValue::Number(_) => 1,
            FieldValue::Date(_) => 2,
            FieldValue::Text(_) => 3,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Empty => Ok(()),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Number(v) => write!(f, "{}", v),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Integer(i64::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Empty)
    }
}

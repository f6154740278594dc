//! Small row type shared by the data table unit tests.

use super::row::TableRow;
use super::value::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleField {
    Id,
    Customer,
    Email,
    Amount,
    Items,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    pub id: String,
    pub customer: String,
    pub email: Option<String>,
    pub amount: f64,
    pub items: u32,
}

impl SampleRow {
    pub fn new(id: &str, customer: &str, amount: f64, items: u32) -> Self {
        Self {
            id: id.to_string(),
            customer: customer.to_string(),
            email: Some(format!(
                "{}@example.com",
                customer.to_lowercase().replace(' ', ".")
            )),
            amount,
            items,
        }
    }
}

impl TableRow for SampleRow {
    type Field = SampleField;

    const FIELDS: &'static [SampleField] = &[
        SampleField::Id,
        SampleField::Customer,
        SampleField::Email,
        SampleField::Amount,
        SampleField::Items,
    ];

    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: SampleField) -> FieldValue {
        match field {
            SampleField::Id => self.id.as_str().into(),
            SampleField::Customer => self.customer.as_str().into(),
            SampleField::Email => self.email.clone().into(),
            SampleField::Amount => self.amount.into(),
            SampleField::Items => self.items.into(),
        }
    }
}

pub fn sample() -> Vec<SampleRow> {
    vec![
        SampleRow::new("ORD-9385", "Emma Thompson", 1299.99, 2),
        SampleRow::new("ORD-9384", "James Wilson", 849.95, 3),
        SampleRow::new("ORD-9383", "Sophia Chen", 2499.99, 1),
        SampleRow::new("ORD-9382", "Lucas Martinez", 199.99, 1),
        SampleRow::new("ORD-9381", "Isabella Kim", 3299.99, 4),
        SampleRow::new("ORD-9380", "Oliver Brown", 749.95, 2),
    ]
}

/// `count` rows with ids `ORD-1..=ORD-count`.
pub fn numbered(count: usize) -> Vec<SampleRow> {
    (1..=count)
        .map(|i| SampleRow::new(&format!("ORD-{}", i), "Test Customer", i as f64, 1))
        .collect()
}

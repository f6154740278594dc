use crate::shared::data_table::{BadgeTone, FieldValue, TableRow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fulfilment status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Completed,
    Processing,
    Failed,
    Refunded,
    Shipped,
}

impl OrderStatus {
    /// Raw value as stored in the dataset (used for search and sort).
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "completed",
            OrderStatus::Processing => "processing",
            OrderStatus::Failed => "failed",
            OrderStatus::Refunded => "refunded",
            OrderStatus::Shipped => "shipped",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "Completed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Failed => "Failed",
            OrderStatus::Refunded => "Refunded",
            OrderStatus::Shipped => "Shipped",
        }
    }

    pub fn badge_tone(&self) -> BadgeTone {
        match self {
            OrderStatus::Completed => BadgeTone::Success,
            OrderStatus::Processing => BadgeTone::Warning,
            OrderStatus::Failed => BadgeTone::Error,
            OrderStatus::Refunded => BadgeTone::Neutral,
            OrderStatus::Shipped => BadgeTone::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    Express,
    Standard,
}

impl ShippingMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingMethod::Express => "Express",
            ShippingMethod::Standard => "Standard",
        }
    }
}

/// One customer order in the "Recent Orders" table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: String,
    pub customer: String,
    pub email: String,
    pub amount: f64,
    pub status: OrderStatus,
    /// Order date (YYYY-MM-DD)
    pub date: NaiveDate,
    pub items: u32,
    pub shipping: ShippingMethod,
}

/// Field keys of [`OrderDto`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    Customer,
    Email,
    Amount,
    Status,
    Date,
    Items,
    Shipping,
}

impl TableRow for OrderDto {
    type Field = OrderField;

    const FIELDS: &'static [OrderField] = &[
        OrderField::Id,
        OrderField::Customer,
        OrderField::Email,
        OrderField::Amount,
        OrderField::Status,
        OrderField::Date,
        OrderField::Items,
        OrderField::Shipping,
    ];

    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: OrderField) -> FieldValue {
        match field {
            OrderField::Id => self.id.as_str().into(),
            OrderField::Customer => self.customer.as_str().into(),
            OrderField::Email => self.email.as_str().into(),
            OrderField::Amount => self.amount.into(),
            OrderField::Status => self.status.as_str().into(),
            OrderField::Date => self.date.into(),
            OrderField::Items => self.items.into(),
            OrderField::Shipping => self.shipping.display_name().into(),
        }
    }
}

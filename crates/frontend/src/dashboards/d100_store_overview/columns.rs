//! Column set of the "Recent Orders" table

use crate::shared::date_utils::format_date;
use contracts::dashboards::d100_store_overview::{OrderDto, OrderField};
use contracts::shared::data_table::{CellContent, ColumnDescriptor};

/// Order totals keep two decimals and no grouping: `$1299.99`.
fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn order_columns() -> Vec<ColumnDescriptor<OrderDto>> {
    vec![
        ColumnDescriptor::new("Order ID", OrderField::Id).sortable(),
        ColumnDescriptor::new("Customer", OrderField::Customer).sortable(),
        ColumnDescriptor::new("Items", OrderField::Items).sortable(),
        ColumnDescriptor::new("Amount", OrderField::Amount)
            .sortable()
            .align_right()
            .with_renderer(|order: &OrderDto| CellContent::text(format_amount(order.amount))),
        ColumnDescriptor::new("Shipping", OrderField::Shipping).sortable(),
        ColumnDescriptor::new("Status", OrderField::Status)
            .sortable()
            .with_renderer(|order: &OrderDto| {
                CellContent::badge(order.status.display_name(), order.status.badge_tone())
            }),
        ColumnDescriptor::new("Date", OrderField::Date)
            .sortable()
            .with_renderer(|order: &OrderDto| CellContent::text(format_date(order.date))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::dashboards::d100_store_overview::{OrderStatus, ShippingMethod};
    use contracts::shared::data_table::{build_model, BadgeTone, DataTableState, TableBody};

    fn order() -> OrderDto {
        OrderDto {
            id: "ORD-9385".to_string(),
            customer: "Emma Thompson".to_string(),
            email: "emma.t@example.com".to_string(),
            amount: 1299.99,
            status: OrderStatus::Completed,
            date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
            items: 2,
            shipping: ShippingMethod::Express,
        }
    }

    #[test]
    fn test_headers_in_display_order() {
        let labels: Vec<String> = order_columns().into_iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            ["Order ID", "Customer", "Items", "Amount", "Shipping", "Status", "Date"]
        );
        assert!(order_columns().iter().all(|c| c.sortable));
    }

    #[test]
    fn test_order_row_cells() {
        let rows = vec![order()];
        let model = build_model(&rows, &order_columns(), false, &DataTableState::default());
        let TableBody::Rows(rendered) = model.body else {
            panic!("expected rows");
        };
        assert_eq!(
            rendered[0].cells,
            vec![
                CellContent::text("ORD-9385"),
                CellContent::text("Emma Thompson"),
                CellContent::text("2"),
                CellContent::text("$1299.99"),
                CellContent::text("Express"),
                CellContent::badge("Completed", BadgeTone::Success),
                CellContent::text("4/15/2025"),
            ]
        );
    }

    #[test]
    fn test_amount_has_two_decimals_without_grouping() {
        assert_eq!(format_amount(1299.99), "$1299.99");
        assert_eq!(format_amount(49.5), "$49.50");
        assert_eq!(format_amount(12500.0), "$12500.00");
    }
}

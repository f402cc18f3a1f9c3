//! CSV rendering of the order collection.
//!
//! Produces the `orders.csv` artifact downloaded from the admin dashboard:
//! a fixed header row, then one row per order. Fields are joined verbatim
//! with no quoting; the export contract assumes comma-free field values.

use chrono::{DateTime, Local, Utc};

use crate::order::Order;

/// Column headers, in output order.
const CSV_HEADER: &str = "Order Number,Customer,Size,Date,Total,Status";

/// Render the date column the way a person reads it, in local time.
///
/// No comma in the rendering: rows must split into exactly six fields.
fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%-m/%-d/%Y %-I:%M:%S %p")
        .to_string()
}

/// Render orders as CSV text: header plus one row per order.
///
/// Totals are recomputed from each order's items (plus fee) and formatted to
/// two decimal places.
#[must_use]
pub fn orders_csv(orders: &[Order]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for order in orders {
        out.push_str(&format!(
            "{},{},{},{},{:.2},{}\n",
            order.order_number,
            order.customer_name,
            order.size,
            format_date(order.timestamp),
            order.total(),
            order.status,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::team_catalog;
    use crate::order::build_order;
    use crate::types::{ItemId, Size};
    use crate::Cart;
    use chrono::TimeZone;

    fn sample_order(name: &str, quantity: u32) -> Order {
        let catalog = team_catalog();
        let mut cart = Cart::new();
        cart.set_quantity(ItemId::new("tshirts"), quantity);
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 15, 30, 0).single().expect("instant");
        build_order(cart.line_items(&catalog).collect(), name, Size::M, now).expect("order")
    }

    #[test]
    fn test_header_only_for_no_orders() {
        let csv = orders_csv(&[]);
        assert_eq!(csv, "Order Number,Customer,Size,Date,Total,Status\n");
    }

    #[test]
    fn test_two_orders_render_three_lines() {
        let orders = vec![sample_order("Jesse", 2), sample_order("Robin", 1)];
        let csv = orders_csv(&orders);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.first().copied(), Some(CSV_HEADER));
        // the sixth comma-separated field of each row is the status literal
        for row in lines.iter().skip(1) {
            let fields: Vec<&str> = row.split(',').collect();
            assert_eq!(fields.len(), 6);
            assert_eq!(fields.get(5).copied(), Some("Pending"));
        }
    }

    #[test]
    fn test_total_column_has_two_decimals() {
        let csv = orders_csv(&[sample_order("Jesse", 2)]);
        // 2 x 8.44 + 1.25
        assert!(csv.contains(",18.13,"));
    }
}

//! Order inspection commands.

#![allow(clippy::print_stdout)]

use std::path::Path;

use merch_store_core::OrderStatus;
use merch_store_core::export::orders_csv;
use merch_store_storefront::store::OrderStore;

use super::open_store;

/// Print stored orders, optionally filtered by status.
pub fn list(status: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match status {
        Some(raw) => Some(raw.parse::<OrderStatus>()?),
        None => None,
    };

    let store = open_store()?;
    let orders = store.filter(filter)?;

    if orders.is_empty() {
        println!("No orders found.");
        return Ok(());
    }

    for order in &orders {
        println!(
            "{}  {}  {}  size {}  ${:.2}  {}",
            order.order_number,
            order.timestamp.format("%Y-%m-%d %H:%M:%S"),
            order.customer_name,
            order.size,
            order.total(),
            order.status,
        );
        for line in &order.items {
            println!("    {} x {}", line.name, line.quantity);
        }
    }
    println!("{} order(s)", orders.len());

    Ok(())
}

/// Write the order collection as CSV to `output`.
pub fn export(output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;
    let orders = store.list()?;

    std::fs::write(output, orders_csv(&orders))?;
    tracing::info!(
        path = %output.display(),
        count = orders.len(),
        "orders exported"
    );

    Ok(())
}

/// Remove every stored order.
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;
    let count = store.list()?.len();
    store.clear()?;
    tracing::info!(removed = count, "order store cleared");

    Ok(())
}

//! Seed demo orders for local development.

use chrono::{Duration, Utc};

use merch_store_core::catalog::team_catalog;
use merch_store_core::{Cart, ItemId, Size, build_order};
use merch_store_storefront::store::OrderStore;

use super::open_store;

/// Append a couple of demo orders to the store.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = team_catalog();
    let store = open_store()?;

    let mut cart = Cart::new();
    cart.set_quantity(ItemId::new("tshirts"), 2);
    cart.add_one(ItemId::new("stickers"));
    let first = build_order(
        cart.line_items(&catalog).collect(),
        "Demo Customer",
        Size::M,
        Utc::now() - Duration::minutes(90),
    )?;

    let mut cart = Cart::new();
    cart.add_one(ItemId::new("hoodies"));
    let second = build_order(
        cart.line_items(&catalog).collect(),
        "Another Customer",
        Size::L,
        Utc::now(),
    )?;

    for order in [first, second] {
        tracing::info!(order_number = %order.order_number, "seeding order");
        store.append(order)?;
    }

    Ok(())
}

//! Order records, totals, and checkout validation.
//!
//! An order is assembled at checkout from the cart's derived line items plus
//! the customer's name and size. Totals are never stored; they are recomputed
//! from the line items wherever they are displayed, so the stored record and
//! every view of it always agree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogItem;
use crate::types::{ItemId, OrderNumber, OrderStatus, Size};

/// Flat screen-setup surcharge applied once per non-empty order.
#[must_use]
pub fn screen_setup_fee() -> Decimal {
    Decimal::new(1_25, 2)
}

/// A catalog item resolved against a cart quantity.
///
/// Derived data: line items exist only inside an order record (or transiently
/// while rendering the cart), never as standalone state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: ItemId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl LineItem {
    /// Join a catalog item with a requested quantity.
    #[must_use]
    pub fn new(item: &CatalogItem, quantity: u32) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity,
        }
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// An immutable record of a completed checkout.
///
/// Only `status` may change after creation (and the record may be deleted by
/// an admin). Totals are recomputed via [`Order::subtotal`] / [`Order::fee`] /
/// [`Order::total`] rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_number: OrderNumber,
    pub items: Vec<LineItem>,
    pub customer_name: String,
    pub size: Size,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
}

impl Order {
    /// Sum of line totals over all items.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// The screen-setup fee: charged once when the order has items, zero
    /// otherwise.
    #[must_use]
    pub fn fee(&self) -> Decimal {
        if self.items.is_empty() {
            Decimal::ZERO
        } else {
            screen_setup_fee()
        }
    }

    /// Subtotal plus fee.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.fee()
    }
}

impl OrderNumber {
    /// Generate an order number from an instant: the literal prefix `ORD-`
    /// followed by the last six digits of the Unix time in milliseconds.
    ///
    /// Uniqueness is best-effort (time-based), not guaranteed.
    #[must_use]
    pub fn from_instant(now: DateTime<Utc>) -> Self {
        let millis = now.timestamp_millis();
        Self::new(format!("ORD-{:06}", millis.rem_euclid(1_000_000)))
    }
}

/// Checkout preconditions that failed.
///
/// The web layer disables the checkout control when these would fail; the
/// explicit error keeps the server honest when a request arrives anyway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Customer name was empty or all whitespace.
    #[error("customer name is required")]
    MissingName,

    /// The cart derived no line items.
    #[error("cart is empty")]
    EmptyCart,
}

/// Assemble an order from derived line items.
///
/// `now` supplies both the order number and the timestamp; core never reads
/// the clock itself.
///
/// # Errors
///
/// Returns [`CheckoutError::MissingName`] if `customer_name` is blank and
/// [`CheckoutError::EmptyCart`] if `line_items` is empty.
pub fn build_order(
    line_items: Vec<LineItem>,
    customer_name: &str,
    size: Size,
    now: DateTime<Utc>,
) -> Result<Order, CheckoutError> {
    let customer_name = customer_name.trim();
    if customer_name.is_empty() {
        return Err(CheckoutError::MissingName);
    }
    if line_items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    Ok(Order {
        order_number: OrderNumber::from_instant(now),
        items: line_items,
        customer_name: customer_name.to_owned(),
        size,
        status: OrderStatus::Pending,
        timestamp: now,
    })
}

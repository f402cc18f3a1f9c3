//! Per-session cart state.
//!
//! A cart is a mapping from item id to requested quantity. Invariant: no
//! entry ever has quantity zero; removal reduces to absence. Entries are not
//! checked against the catalog when added - an unknown id is storable, and
//! the catalog join in [`Cart::line_items`] silently drops it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::order::LineItem;
use crate::types::ItemId;

/// Cart state: item id -> quantity (always >= 1).
///
/// Entries are keyed in a `BTreeMap`, so derived line items come out in a
/// deterministic order (by item id).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<ItemId, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add one of an item (absent -> 1).
    ///
    /// Always succeeds; the id is not validated against the catalog.
    pub fn add_one(&mut self, item_id: ItemId) {
        *self.entries.entry(item_id).or_insert(0) += 1;
    }

    /// Set the quantity for an item. Zero removes the entry.
    pub fn set_quantity(&mut self, item_id: ItemId, quantity: u32) {
        if quantity == 0 {
            self.entries.remove(&item_id);
        } else {
            self.entries.insert(item_id, quantity);
        }
    }

    /// Quantity currently requested for an item (0 when absent).
    #[must_use]
    pub fn quantity(&self, item_id: &ItemId) -> u32 {
        self.entries.get(item_id).copied().unwrap_or(0)
    }

    /// Join cart entries against the catalog, producing line items.
    ///
    /// Entries whose id is absent from the catalog are silently dropped.
    pub fn line_items<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = LineItem> + 'a {
        self.entries.iter().filter_map(|(id, &quantity)| {
            catalog.get(id).map(|item| LineItem::new(item, quantity))
        })
    }

    /// Total quantity across derived line items (the cart badge).
    #[must_use]
    pub fn total_quantity(&self, catalog: &Catalog) -> u32 {
        self.line_items(catalog).map(|line| line.quantity).sum()
    }

    /// Whether the cart holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

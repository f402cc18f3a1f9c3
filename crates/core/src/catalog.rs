//! The fixed list of purchasable items.
//!
//! The catalog is defined once at startup and never mutated. Prices use
//! decimal arithmetic; a zero price marks a free item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ItemId;

/// A purchasable item in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique item slug, e.g. `tshirts`.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price in dollars. Zero means free.
    pub unit_price: Decimal,
    /// Optional marketing blurb.
    pub description: Option<String>,
    /// Optional image path served by the storefront.
    pub image: Option<String>,
}

impl CatalogItem {
    /// Whether the item costs nothing.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.unit_price.is_zero()
    }
}

/// The read-only item catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Create a catalog from a list of items.
    #[must_use]
    pub const fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// All items, in display order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }
}

/// The team merch catalog shipped with the store.
#[must_use]
pub fn team_catalog() -> Catalog {
    fn item(
        id: &str,
        name: &str,
        cents: i64,
        description: &str,
    ) -> CatalogItem {
        CatalogItem {
            id: ItemId::new(id),
            name: name.to_owned(),
            unit_price: Decimal::new(cents, 2),
            description: Some(description.to_owned()),
            image: Some(format!("/images/{id}.jpg")),
        }
    }

    Catalog::new(vec![
        item(
            "hoodies",
            "Hoodies",
            35_23,
            "Comfortable team hoodies with company logo",
        ),
        item(
            "quarter-zips",
            "Quarter Zips",
            31_37,
            "Professional quarter-zip pullovers",
        ),
        item("tshirts", "T-Shirts", 8_44, "Classic team t-shirts"),
        item(
            "polo-shirts",
            "Polo Shirts",
            17_23,
            "Business casual polo shirts",
        ),
        item("stickers", "Stickers", 0, "Free company logo stickers"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_catalog_ids_are_unique() {
        let catalog = team_catalog();
        let mut ids: Vec<_> = catalog.items().iter().map(|i| i.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.items().len());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = team_catalog();
        let tshirts = catalog.get(&ItemId::new("tshirts")).expect("tshirts");
        assert_eq!(tshirts.name, "T-Shirts");
        assert_eq!(tshirts.unit_price, Decimal::new(8_44, 2));
        assert!(catalog.get(&ItemId::new("mugs")).is_none());
    }

    #[test]
    fn test_stickers_are_free() {
        let catalog = team_catalog();
        let stickers = catalog.get(&ItemId::new("stickers")).expect("stickers");
        assert!(stickers.is_free());
    }
}

//! CLI command implementations.

pub mod orders;
pub mod seed;

use std::path::PathBuf;

use merch_store_storefront::store::{JsonFileOrderStore, StoreError};

/// Open the order store at the configured path.
///
/// Honors `MERCH_ORDERS_PATH` (the same variable the server reads), falling
/// back to `data/orders.json`.
pub fn open_store() -> Result<JsonFileOrderStore, StoreError> {
    let path = std::env::var("MERCH_ORDERS_PATH")
        .map_or_else(|_| PathBuf::from("data/orders.json"), PathBuf::from);
    JsonFileOrderStore::open(path)
}

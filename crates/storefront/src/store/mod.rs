//! Order persistence behind a repository trait.
//!
//! The backing store is a single serialized collection: every operation reads
//! the whole collection and mutations rewrite it wholesale. That model is
//! deliberate - it matches the tool's single-writer, single-instance scope -
//! and the trait keeps callers agnostic so a different backing store can be
//! substituted without touching them.
//!
//! Two implementations:
//!
//! - [`JsonFileOrderStore`] - the production store, one JSON file on disk
//! - [`MemoryOrderStore`] - an in-memory double honoring the same contract,
//!   used by tests and the CLI

use thiserror::Error;

use merch_store_core::{Order, OrderNumber, OrderStatus};

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileOrderStore;
pub use memory::MemoryOrderStore;

/// Errors that can occur in the order store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the collection failed.
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No order with the requested order number exists.
    ///
    /// Update and delete report this explicitly instead of silently doing
    /// nothing, so callers can distinguish "changed" from "no such order".
    #[error("order not found")]
    NotFound,
}

/// Repository contract for the order collection.
///
/// `list` returns insertion order, newest last. `update_status` and `delete`
/// leave the store unchanged and return [`StoreError::NotFound`] when the
/// order number does not exist.
pub trait OrderStore: Send + Sync {
    /// Append an order to the collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection cannot be read or rewritten.
    fn append(&self, order: Order) -> Result<(), StoreError>;

    /// The full collection, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection cannot be read.
    fn list(&self) -> Result<Vec<Order>, StoreError>;

    /// The subset matching `status`, or the full collection when `None`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection cannot be read.
    fn filter(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|order| status.is_none_or(|s| order.status == s))
            .collect())
    }

    /// Replace the status of the order with `order_number`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such order exists; the store is
    /// unchanged in that case.
    fn update_status(
        &self,
        order_number: &OrderNumber,
        status: OrderStatus,
    ) -> Result<(), StoreError>;

    /// Remove the order with `order_number`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such order exists; the store is
    /// unchanged in that case.
    fn delete(&self, order_number: &OrderNumber) -> Result<(), StoreError>;
}

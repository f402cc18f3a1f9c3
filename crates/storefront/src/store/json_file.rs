//! JSON-file order store.
//!
//! The whole collection lives in one file as a JSON array of orders. Every
//! read parses the full file; every mutation rewrites it wholesale. A
//! process-local mutex serializes the read-modify-write cycles; there is no
//! cross-process coordination (last-write-wins at collection granularity).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use merch_store_core::{Order, OrderNumber, OrderStatus};

use super::{OrderStore, StoreError};

/// Order store backed by a single JSON file.
#[derive(Debug)]
pub struct JsonFileOrderStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileOrderStore {
    /// Open a store at `path`, creating parent directories as needed.
    ///
    /// The file itself is created lazily on first write; a missing file reads
    /// as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the parent directory cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove every order, leaving a valid empty collection on disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be written.
    pub fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        self.write_all(&[])
    }

    /// Read the whole collection from disk.
    ///
    /// A missing file is an empty collection. A malformed file is logged and
    /// treated as empty - the next write replaces it - so corruption never
    /// propagates as a parse error to callers.
    fn read_all(&self) -> Result<Vec<Order>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        match serde_json::from_str(&raw) {
            Ok(orders) => Ok(orders),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "order store file is malformed, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Rewrite the whole collection to disk.
    fn write_all(&self, orders: &[Order]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(orders)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl OrderStore for JsonFileOrderStore {
    fn append(&self, order: Order) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut orders = self.read_all()?;
        orders.push(order);
        self.write_all(&orders)
    }

    fn list(&self) -> Result<Vec<Order>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        self.read_all()
    }

    fn update_status(
        &self,
        order_number: &OrderNumber,
        status: OrderStatus,
    ) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut orders = self.read_all()?;
        let order = orders
            .iter_mut()
            .find(|order| &order.order_number == order_number)
            .ok_or(StoreError::NotFound)?;
        order.status = status;
        self.write_all(&orders)
    }

    fn delete(&self, order_number: &OrderNumber) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut orders = self.read_all()?;
        let before = orders.len();
        orders.retain(|order| &order.order_number != order_number);
        if orders.len() == before {
            return Err(StoreError::NotFound);
        }
        self.write_all(&orders)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use merch_store_core::catalog::team_catalog;
    use merch_store_core::{Cart, ItemId, Size, build_order};
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    /// A fresh file path under the system temp dir, unique per test.
    fn temp_store() -> JsonFileOrderStore {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "merch-store-test-{}-{n}/orders.json",
            std::process::id()
        ));
        JsonFileOrderStore::open(path).unwrap()
    }

    fn sample_order(name: &str, seconds: u32) -> Order {
        let catalog = team_catalog();
        let mut cart = Cart::new();
        cart.set_quantity(ItemId::new("tshirts"), 2);
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, seconds).unwrap();
        build_order(cart.line_items(&catalog).collect(), name, Size::M, now).unwrap()
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let store = temp_store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_list_round_trips() {
        let store = temp_store();
        let order = sample_order("Jesse", 1);
        store.append(order.clone()).unwrap();
        store.append(sample_order("Robin", 2)).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed.first(), Some(&order));
    }

    #[test]
    fn test_update_status_flips_only_the_matched_order() {
        let store = temp_store();
        let first = sample_order("Jesse", 1);
        let second = sample_order("Robin", 2);
        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();

        store
            .update_status(&first.order_number, OrderStatus::Completed)
            .unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.first().unwrap().status, OrderStatus::Completed);
        // every other field of the matched order, and the whole of the other
        // order, are untouched
        assert_eq!(listed.first().unwrap().items, first.items);
        assert_eq!(listed.get(1), Some(&second));
    }

    #[test]
    fn test_update_status_unknown_number_leaves_store_unchanged() {
        let store = temp_store();
        store.append(sample_order("Jesse", 1)).unwrap();
        let before = store.list().unwrap();

        let result = store.update_status(&OrderNumber::new("ORD-999999"), OrderStatus::Completed);
        assert!(matches!(result, Err(StoreError::NotFound)));
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_delete_removes_matching_order() {
        let store = temp_store();
        let first = sample_order("Jesse", 1);
        store.append(first.clone()).unwrap();
        store.append(sample_order("Robin", 2)).unwrap();

        store.delete(&first.order_number).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert!(matches!(
            store.delete(&first.order_number),
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn test_filter_by_status() {
        let store = temp_store();
        let first = sample_order("Jesse", 1);
        store.append(first.clone()).unwrap();
        store.append(sample_order("Robin", 2)).unwrap();
        store
            .update_status(&first.order_number, OrderStatus::Completed)
            .unwrap();

        assert_eq!(store.filter(None).unwrap().len(), 2);
        assert_eq!(store.filter(Some(OrderStatus::Pending)).unwrap().len(), 1);
        assert_eq!(
            store.filter(Some(OrderStatus::Completed)).unwrap().len(),
            1
        );
    }

    #[test]
    fn test_malformed_file_falls_back_to_empty() {
        let store = temp_store();
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.list().unwrap().is_empty());

        // the next write replaces the corrupt blob
        store.append(sample_order("Jesse", 1)).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_leaves_valid_empty_collection() {
        let store = temp_store();
        store.append(sample_order("Jesse", 1)).unwrap();
        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }
}

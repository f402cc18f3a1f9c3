//! In-memory order store.
//!
//! Honors the same contract as the file-backed store and exists for tests
//! and tooling that should not touch the filesystem.

use std::sync::Mutex;

use merch_store_core::{Order, OrderNumber, OrderStatus};

use super::{OrderStore, StoreError};

/// Order store held in process memory.
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    orders: Mutex<Vec<Order>>,
}

impl MemoryOrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `orders`.
    #[must_use]
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: Mutex::new(orders),
        }
    }
}

impl OrderStore for MemoryOrderStore {
    fn append(&self, order: Order) -> Result<(), StoreError> {
        let mut orders = self
            .orders
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        orders.push(order);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Order>, StoreError> {
        let orders = self
            .orders
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(orders.clone())
    }

    fn update_status(
        &self,
        order_number: &OrderNumber,
        status: OrderStatus,
    ) -> Result<(), StoreError> {
        let mut orders = self
            .orders
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let order = orders
            .iter_mut()
            .find(|order| &order.order_number == order_number)
            .ok_or(StoreError::NotFound)?;
        order.status = status;
        Ok(())
    }

    fn delete(&self, order_number: &OrderNumber) -> Result<(), StoreError> {
        let mut orders = self
            .orders
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let before = orders.len();
        orders.retain(|order| &order.order_number != order_number);
        if orders.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use merch_store_core::catalog::team_catalog;
    use merch_store_core::{Cart, ItemId, Size, build_order};

    fn sample_order(name: &str) -> Order {
        let catalog = team_catalog();
        let mut cart = Cart::new();
        cart.add_one(ItemId::new("hoodies"));
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        build_order(cart.line_items(&catalog).collect(), name, Size::L, now).unwrap()
    }

    #[test]
    fn test_append_and_list_preserve_insertion_order() {
        let store = MemoryOrderStore::new();
        store.append(sample_order("Jesse")).unwrap();
        store.append(sample_order("Robin")).unwrap();
        let names: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|o| o.customer_name)
            .collect();
        assert_eq!(names, vec!["Jesse".to_owned(), "Robin".to_owned()]);
    }

    #[test]
    fn test_update_and_delete_report_not_found() {
        let store = MemoryOrderStore::new();
        let missing = OrderNumber::new("ORD-000000");
        assert!(matches!(
            store.update_status(&missing, OrderStatus::Completed),
            Err(StoreError::NotFound)
        ));
        assert!(matches!(store.delete(&missing), Err(StoreError::NotFound)));
    }
}

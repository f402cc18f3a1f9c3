//! Application state shared across handlers.

use std::sync::Arc;

use merch_store_core::Catalog;

use crate::config::StorefrontConfig;
use crate::services::auth::{AdminGate, AuthError};
use crate::store::OrderStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the order store, and the admin gate. The store is injected as a
/// trait object so tests and tooling can substitute the in-memory double.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    orders: Arc<dyn OrderStore>,
    gate: AdminGate,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Hashes the configured admin password for the gate.
    ///
    /// # Errors
    ///
    /// Returns an error if the admin password cannot be hashed.
    pub fn new(
        config: StorefrontConfig,
        catalog: Catalog,
        orders: Arc<dyn OrderStore>,
    ) -> Result<Self, AuthError> {
        let gate = AdminGate::new(&config.admin_password)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                orders,
                gate,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the item catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderStore {
        self.inner.orders.as_ref()
    }

    /// Get a reference to the admin gate.
    #[must_use]
    pub fn gate(&self) -> &AdminGate {
        &self.inner.gate
    }
}

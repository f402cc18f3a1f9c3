//! Domain models for the storefront web layer.
//!
//! The interesting domain types live in `merch-store-core`; this module holds
//! the session vocabulary shared between routes and middleware.

/// Keys under which per-visitor state is stored in the session.
pub mod session_keys {
    /// The visitor's cart (`merch_store_core::Cart`).
    pub const CART: &str = "cart";

    /// Admin-gate flag (`bool`). Present and true only while logged in.
    pub const ADMIN_AUTHENTICATED: &str = "admin_authenticated";
}

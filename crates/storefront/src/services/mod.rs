//! Application services for the storefront.

pub mod auth;

pub use auth::{AdminGate, AuthError};

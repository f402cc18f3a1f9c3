//! Merch Store Storefront - catalog, cart, checkout, and admin screens.
//!
//! This crate serves the whole store from one process:
//!
//! - Axum web framework with server-rendered Askama templates
//! - Per-visitor cart state held in tower-sessions
//! - Orders persisted as a single JSON file behind the [`store::OrderStore`]
//!   trait (wholesale read-modify-write, single-writer by assumption)
//! - A shared-password admin gate over the dashboard and export routes
//!
//! The binary target is a thin `main` around [`app`]; integration tests mount
//! the same router in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Build the complete application router.
///
/// Includes the session layer (in-memory store) and request tracing, so the
/// returned router behaves identically when served over a socket or driven
/// in-process by tests.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer();

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .fallback(routes::not_found)
        .layer(session_layer)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

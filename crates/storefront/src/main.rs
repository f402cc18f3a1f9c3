//! Merch Store - team merchandise storefront and admin dashboard.
//!
//! This binary serves the whole store on one port (default 3000).
//!
//! # Architecture
//!
//! - Axum web framework with Askama server-side rendering
//! - Per-visitor cart state in tower-sessions
//! - Orders in a single JSON file behind the `OrderStore` trait
//! - Shared-password admin gate over `/admin`
//!
//! The heavy lifting lives in the library crate; this file wires
//! configuration, logging, the store, and the listener together.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use merch_store_storefront::app;
use merch_store_storefront::config::StorefrontConfig;
use merch_store_storefront::state::AppState;
use merch_store_storefront::store::JsonFileOrderStore;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "merch_store_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Open the order store (creates the data directory if needed)
    let orders = JsonFileOrderStore::open(config.orders_path.clone())
        .expect("Failed to open order store");
    tracing::info!(path = %orders.path().display(), "order store opened");

    // Build application state with the fixed team catalog
    let state = AppState::new(config.clone(), merch_store_core::catalog::team_catalog(), Arc::new(orders))
        .expect("Failed to initialize application state");

    let router = app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

//! End-to-end tests for the team merch store.
//!
//! Tests mount the full router in-process and drive it with
//! `tower::ServiceExt::oneshot` - no sockets, no external services. The order
//! store is the in-memory double, shared with the test so state can be
//! asserted directly; the session cookie is threaded between requests by
//! hand.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p merch-store-integration-tests
//! ```

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use secrecy::SecretString;

use merch_store_core::catalog::team_catalog;
use merch_store_storefront::app;
use merch_store_storefront::config::StorefrontConfig;
use merch_store_storefront::state::AppState;
use merch_store_storefront::store::MemoryOrderStore;

/// The shared admin password used by test apps.
pub const TEST_ADMIN_PASSWORD: &str = "letmein-for-tests";

/// Build the full application router over an in-memory order store.
///
/// Returns the router together with a handle on the store so tests can
/// inspect persisted orders directly.
///
/// # Panics
///
/// Panics if the application state cannot be constructed.
#[must_use]
pub fn test_app() -> (Router, Arc<MemoryOrderStore>) {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().expect("host"),
        port: 0,
        admin_password: SecretString::from(TEST_ADMIN_PASSWORD),
        orders_path: "unused-in-tests.json".into(),
    };

    let store = Arc::new(MemoryOrderStore::new());
    let state = AppState::new(config, team_catalog(), store.clone()).expect("app state");

    (app(state), store)
}

/// Build a GET request, attaching the session cookie when present.
///
/// # Panics
///
/// Panics if the request cannot be built.
#[must_use]
pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("request")
}

/// Build a form POST request, attaching the session cookie when present.
///
/// # Panics
///
/// Panics if the request cannot be built.
#[must_use]
pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_owned())).expect("request")
}

/// Extract the session cookie (name=value) from a response, if one was set.
pub fn session_cookie<B>(response: &Response<B>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(ToOwned::to_owned)
}

/// The Location header of a redirect response.
pub fn location<B>(response: &Response<B>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// Read a response body to a string.
///
/// # Panics
///
/// Panics if the body cannot be collected or is not UTF-8.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("collect body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Catalog (product grid)
//! GET  /health                 - Health check
//!
//! # Cart & Checkout
//! GET  /cart                   - Cart / checkout page
//! POST /cart/add               - Add one of an item
//! POST /cart/update            - Set an item quantity (0 removes)
//! POST /cart/checkout          - Place the order
//! GET  /cart/confirmation/{order_number} - Order confirmation
//!
//! # Admin (gate-protected except login)
//! GET  /admin                  - Dashboard (summary, table, ?status= filter)
//! GET  /admin/login            - Login page
//! POST /admin/login            - Login action
//! POST /admin/logout           - Logout action
//! POST /admin/orders/{order_number}/complete - Mark order completed
//! POST /admin/orders/{order_number}/delete   - Delete order
//! GET  /admin/orders.csv       - CSV export download
//! ```
//!
//! Anything else falls through to the not-found view.

pub mod admin;
pub mod cart;
pub mod catalog;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::filters;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/checkout", post(cart::checkout))
        .route("/confirmation/{order_number}", get(cart::confirmation))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::dashboard))
        .route("/login", get(admin::login_page).post(admin::login))
        .route("/logout", post(admin::logout))
        .route("/orders/{order_number}/complete", post(admin::complete))
        .route("/orders/{order_number}/delete", post(admin::delete))
        .route("/orders.csv", get(admin::export_csv))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/", get(catalog::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Admin routes
        .nest("/admin", admin_routes())
}

/// Not-found fallback template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

/// Fallback handler for unmatched paths.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate).into_response()
}

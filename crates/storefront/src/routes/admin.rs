//! Admin route handlers: login, dashboard, order actions, CSV export.
//!
//! Every handler except the login pair requires the gate to be open via the
//! [`RequireAdminAuth`] extractor. The dashboard summary is recomputed from
//! the full collection on every request; order totals are re-summed from
//! items plus fee, never read from a stored figure.

use std::collections::HashSet;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use merch_store_core::{Order, OrderNumber, OrderStatus, export::orders_csv};

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::middleware::auth::{clear_admin_authenticated, set_admin_authenticated};
use crate::services::auth::AuthError;
use crate::state::AppState;

// =============================================================================
// Summary Aggregates
// =============================================================================

/// Aggregates shown in the dashboard summary cards.
#[derive(Debug, PartialEq, Eq)]
pub struct OrderSummary {
    pub total_orders: usize,
    pub total_revenue: Decimal,
    pub pending_orders: usize,
    pub unique_customers: usize,
}

/// Compute the summary over the whole collection.
///
/// Revenue re-sums every order's items plus fee rather than trusting any
/// stored figure.
#[must_use]
pub fn summarize(orders: &[Order]) -> OrderSummary {
    let customers: HashSet<&str> = orders
        .iter()
        .map(|order| order.customer_name.as_str())
        .collect();

    OrderSummary {
        total_orders: orders.len(),
        total_revenue: orders.iter().map(Order::total).sum(),
        pending_orders: orders
            .iter()
            .filter(|order| order.status == OrderStatus::Pending)
            .count(),
        unique_customers: customers.len(),
    }
}

// =============================================================================
// Views
// =============================================================================

/// Summary display data for templates.
pub struct SummaryView {
    pub total_orders: usize,
    pub total_revenue: String,
    pub pending_orders: usize,
    pub unique_customers: usize,
}

impl From<&OrderSummary> for SummaryView {
    fn from(summary: &OrderSummary) -> Self {
        Self {
            total_orders: summary.total_orders,
            total_revenue: format!("${:.2}", summary.total_revenue),
            pending_orders: summary.pending_orders,
            unique_customers: summary.unique_customers,
        }
    }
}

/// Order row display data for the dashboard table.
pub struct OrderRowView {
    pub order_number: String,
    pub date: String,
    pub customer: String,
    pub size: String,
    /// One line per item, e.g. `T-Shirts x 2`.
    pub items: Vec<String>,
    pub total: String,
    pub status: String,
    pub pending: bool,
}

impl From<&Order> for OrderRowView {
    fn from(order: &Order) -> Self {
        Self {
            order_number: order.order_number.to_string(),
            date: format_timestamp(order.timestamp),
            customer: order.customer_name.clone(),
            size: order.size.to_string(),
            items: order
                .items
                .iter()
                .map(|line| format!("{} x {}", line.name, line.quantity))
                .collect(),
            total: format!("${:.2}", order.total()),
            status: order.status.to_string(),
            pending: order.status == OrderStatus::Pending,
        }
    }
}

/// Render a timestamp the way a person reads it, in local time.
fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%-m/%-d/%Y %-I:%M:%S %p")
        .to_string()
}

// =============================================================================
// Templates & Forms
// =============================================================================

/// Admin login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    /// Whether the previous attempt failed.
    pub failed: bool,
}

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub summary: SummaryView,
    pub rows: Vec<OrderRowView>,
    /// Active status filter: `all`, `Pending`, or `Completed`.
    pub filter: String,
}

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
}

/// Dashboard query parameters.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Status filter; anything but a known status means "all".
    pub status: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the admin login page.
#[instrument]
pub async fn login_page() -> AdminLoginTemplate {
    AdminLoginTemplate { failed: false }
}

/// Verify the shared password and open the gate.
///
/// A failed attempt re-renders the form with a generic message; the gate
/// flag stays unset.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match state.gate().verify(&form.password) {
        Ok(()) => {
            set_admin_authenticated(&session).await?;
            tracing::info!("admin gate opened");
            Ok(Redirect::to("/admin").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("failed admin login attempt");
            Ok(AdminLoginTemplate { failed: true }.into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Close the gate for this session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_admin_authenticated(&session).await?;
    Ok(Redirect::to("/admin/login"))
}

/// Display the dashboard: summary cards plus the (optionally filtered)
/// order table.
#[instrument(skip(_admin, state))]
pub async fn dashboard(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<AdminDashboardTemplate> {
    let status_filter = query
        .status
        .as_deref()
        .and_then(|s| s.parse::<OrderStatus>().ok());

    // Summary covers the whole collection regardless of the table filter.
    let all_orders = state.orders().list()?;
    let summary = summarize(&all_orders);

    let rows = state
        .orders()
        .filter(status_filter)?
        .iter()
        .map(OrderRowView::from)
        .collect();

    Ok(AdminDashboardTemplate {
        summary: SummaryView::from(&summary),
        rows,
        filter: status_filter.map_or_else(|| "all".to_owned(), |s| s.to_string()),
    })
}

/// Mark an order completed.
#[instrument(skip(_admin, state))]
pub async fn complete(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(order_number): Path<String>,
) -> Result<Redirect> {
    let order_number = OrderNumber::new(order_number);
    state
        .orders()
        .update_status(&order_number, OrderStatus::Completed)?;
    tracing::info!(order_number = %order_number, "order completed");
    Ok(Redirect::to("/admin"))
}

/// Delete an order.
#[instrument(skip(_admin, state))]
pub async fn delete(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Path(order_number): Path<String>,
) -> Result<Redirect> {
    let order_number = OrderNumber::new(order_number);
    state.orders().delete(&order_number)?;
    tracing::info!(order_number = %order_number, "order deleted");
    Ok(Redirect::to("/admin"))
}

/// Download the order collection as `orders.csv`.
#[instrument(skip(_admin, state))]
pub async fn export_csv(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Response> {
    let orders = state.orders().list()?;
    let csv = orders_csv(&orders);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"orders.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

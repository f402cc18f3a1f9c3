//! Cart and checkout route handlers.
//!
//! The cart lives in the visitor's session as a plain id -> quantity map and
//! is joined against the catalog on every render. Checkout validates the
//! form, builds the order record, appends it to the store, and clears the
//! cart - all in direct response to the request.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use merch_store_core::{Cart, Catalog, ItemId, LineItem, Size, build_order, screen_setup_fee};

use crate::error::Result;
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub fee: String,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Derive the display cart from session state and the catalog.
    #[must_use]
    pub fn from_cart(cart: &Cart, catalog: &Catalog) -> Self {
        let lines: Vec<LineItem> = cart.line_items(catalog).collect();
        let subtotal: Decimal = lines.iter().map(LineItem::line_total).sum();
        let total = if lines.is_empty() {
            Decimal::ZERO
        } else {
            subtotal + screen_setup_fee()
        };

        Self {
            items: lines.iter().map(CartItemView::from).collect(),
            subtotal: format_price(subtotal),
            fee: format_price(screen_setup_fee()),
            total: format_price(total),
            item_count: lines.iter().map(|line| line.quantity).sum(),
        }
    }
}

impl From<&LineItem> for CartItemView {
    fn from(line: &LineItem) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            quantity: line.quantity,
            price: format_price(line.unit_price),
            line_price: format_price(line.line_total()),
        }
    }
}

/// Format a decimal amount as a price string.
fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session (a fresh session starts empty).
pub async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Write the cart back to the session.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub item_id: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub item_id: String,
    pub quantity: u32,
    /// Page to return to; must be a local path.
    pub next: Option<String>,
}

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub size: String,
}

/// Size option for the checkout selector.
pub struct SizeView {
    pub value: String,
    pub label: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub sizes: Vec<SizeView>,
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/confirmation.html")]
pub struct ConfirmationTemplate {
    pub order_number: String,
}

/// Display the cart / checkout page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<CartShowTemplate> {
    let cart = load_cart(&session).await?;

    Ok(CartShowTemplate {
        cart: CartView::from_cart(&cart, state.catalog()),
        sizes: Size::ALL
            .into_iter()
            .map(|size| SizeView {
                value: size.to_string(),
                label: size.label().to_owned(),
            })
            .collect(),
    })
}

/// Add one of an item to the cart.
///
/// The item id is not checked against the catalog; an unknown id creates an
/// entry the catalog join never surfaces.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Result<Redirect> {
    let mut cart = load_cart(&session).await?;
    cart.add_one(ItemId::new(form.item_id));
    save_cart(&session, &cart).await?;

    Ok(Redirect::to("/"))
}

/// Set an item's quantity. Zero removes the entry.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    let mut cart = load_cart(&session).await?;
    cart.set_quantity(ItemId::new(form.item_id), form.quantity);
    save_cart(&session, &cart).await?;

    // Only follow local redirect targets.
    let next = form
        .next
        .filter(|n| n.starts_with('/') && !n.starts_with("//"))
        .unwrap_or_else(|| "/".to_owned());
    Ok(Redirect::to(&next))
}

/// Place the order.
///
/// The checkout control is disabled until a name is entered and a size is
/// selected; this handler re-validates anyway and bounces invalid requests
/// back to the cart.
#[instrument(skip(state, session))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let Ok(size) = form.size.parse::<Size>() else {
        return Ok(Redirect::to("/cart").into_response());
    };

    let mut cart = load_cart(&session).await?;
    let lines: Vec<LineItem> = cart.line_items(state.catalog()).collect();

    let order = match build_order(lines, &form.customer_name, size, Utc::now()) {
        Ok(order) => order,
        Err(e) => {
            tracing::debug!(error = %e, "checkout rejected");
            return Ok(Redirect::to("/cart").into_response());
        }
    };

    state.orders().append(order.clone())?;
    cart.clear();
    save_cart(&session, &cart).await?;

    tracing::info!(order_number = %order.order_number, customer = %order.customer_name, "order placed");

    Ok(Redirect::to(&format!("/cart/confirmation/{}", order.order_number)).into_response())
}

/// Display the order confirmation.
#[instrument]
pub async fn confirmation(Path(order_number): Path<String>) -> ConfirmationTemplate {
    ConfirmationTemplate { order_number }
}

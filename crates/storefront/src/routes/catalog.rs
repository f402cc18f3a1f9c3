//! Catalog route handler.
//!
//! The storefront home page: every catalog item as a card, with an add
//! button or a quantity stepper depending on whether it is already in the
//! visitor's cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use merch_store_core::CatalogItem;

use crate::error::Result;
use crate::filters;
use crate::routes::cart::load_cart;
use crate::state::AppState;

/// Product display data for templates.
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub free: bool,
    /// Quantity of this product already in the visitor's cart.
    pub quantity: u32,
}

impl ProductView {
    fn new(item: &CatalogItem, quantity: u32) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: format!("${:.2}", item.unit_price),
            description: item.description.clone().unwrap_or_default(),
            free: item.is_free(),
            quantity,
        }
    }
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogIndexTemplate {
    pub products: Vec<ProductView>,
    pub cart_count: u32,
}

/// Display the catalog page.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<CatalogIndexTemplate> {
    let cart = load_cart(&session).await?;
    let catalog = state.catalog();

    let products = catalog
        .items()
        .iter()
        .map(|item| ProductView::new(item, cart.quantity(&item.id)))
        .collect();

    Ok(CatalogIndexTemplate {
        products,
        cart_count: cart.total_quantity(catalog),
    })
}

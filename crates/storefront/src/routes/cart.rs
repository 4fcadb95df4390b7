//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the visitor's session; every handler loads it,
//! applies one operation, and saves it back.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use lectio_core::ProductId;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::services::{CartService, CartUpdate, parse_quantity};
use crate::state::AppState;
use crate::storage::SessionStorage;
use crate::views::{CartTableView, Page, messages, render_cart};

/// HTMX event fired after any cart change.
pub const CART_UPDATED_TRIGGER: (&str, &str) = ("HX-Trigger", "cart-updated");

/// Add/remove form data.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub product_id: String,
}

/// Quantity change form data.
///
/// The quantity arrives as raw text from a number input.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: String,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
    pub oob: bool,
}

/// Add-to-cart acknowledgement with an out-of-band badge update.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_added.html")]
pub struct CartAddedTemplate {
    pub message: &'static str,
    pub count: u32,
    pub oob: bool,
}

/// Rebuilt cart rows with out-of-band total and badge updates.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_update.html")]
pub struct CartUpdateTemplate {
    pub cart: CartTableView,
    pub count: u32,
    pub oob: bool,
}

fn service(session: Session) -> CartService<SessionStorage> {
    CartService::new(SessionStorage::new(session))
}

/// Re-render the cart table after a change.
fn cart_fragment(state: &AppState, update: &CartUpdate) -> Result<Response> {
    let cart = render_cart(&Page::Cart.containers(), state.catalogue(), &update.cart)
        .ok_or_else(|| AppError::Internal("cart page has no cart table".to_string()))?;

    Ok((
        AppendHeaders([CART_UPDATED_TRIGGER]),
        CartUpdateTemplate {
            cart,
            count: update.item_count,
            oob: true,
        },
    )
        .into_response())
}

/// Add one unit of a product (HTMX).
///
/// Returns the acknowledgement message and the refreshed badge.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<ProductForm>) -> Result<Response> {
    add_breadcrumb(
        "cart",
        "Add to cart",
        Some(&[("product_id", form.product_id.as_str())]),
    );

    let update = service(session).add(ProductId::new(form.product_id)).await?;

    Ok((
        AppendHeaders([CART_UPDATED_TRIGGER]),
        CartAddedTemplate {
            message: messages::ADDED_TO_CART,
            count: update.item_count,
            oob: true,
        },
    )
        .into_response())
}

/// Set a product's quantity (HTMX).
///
/// Zero or less removes the entry. Returns the rebuilt cart rows.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let quantity = parse_quantity(&form.quantity)?;
    let update = service(session)
        .set_quantity(ProductId::new(form.product_id), quantity)
        .await?;
    cart_fragment(&state, &update)
}

/// Remove a product from the cart (HTMX).
///
/// Responds 204 without touching storage if the product was not in the cart.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    match service(session).remove(&form.product_id).await? {
        Some(update) => cart_fragment(&state, &update),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let count = service(session).store().item_count().await?;
    Ok(CartCountTemplate { count, oob: false })
}

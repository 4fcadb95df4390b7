//! Mock checkout completion.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{AppendHeaders, IntoResponse, Response};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::routes::cart::CART_UPDATED_TRIGGER;
use crate::services::CartService;
use crate::storage::SessionStorage;
use crate::views::{CheckoutView, Page, complete_checkout_view};

/// Completed checkout section with an out-of-band badge update.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_complete.html")]
pub struct CheckoutCompleteTemplate {
    pub checkout: CheckoutView,
    pub count: u32,
    pub oob: bool,
}

/// Complete the order (HTMX).
///
/// Clears the cart and returns the emptied checkout section with the
/// thank-you message. No payment or order record is involved.
#[instrument(skip(session))]
pub async fn complete(session: Session) -> Result<Response> {
    add_breadcrumb("checkout", "Complete order", None);

    let update = CartService::new(SessionStorage::new(session))
        .complete_checkout()
        .await?;
    let checkout = complete_checkout_view(&Page::Checkout.containers())
        .ok_or_else(|| AppError::Internal("checkout page has no checkout table".to_string()))?;

    Ok((
        AppendHeaders([CART_UPDATED_TRIGGER]),
        CheckoutCompleteTemplate {
            checkout,
            count: update.item_count,
            oob: true,
        },
    )
        .into_response())
}

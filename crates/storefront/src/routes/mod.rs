//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Catalogue page
//! GET  /products               - Catalogue page
//! GET  /product?id=            - Product detail page
//! GET  /health                 - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add one unit (returns message + badge)
//! POST /cart/update            - Set quantity (returns cart rows fragment)
//! POST /cart/remove            - Remove item (returns cart rows fragment, 204 if absent)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Checkout page
//! POST /checkout/complete      - Mock order completion (clears the cart)
//!
//! # Assets
//! GET  /static/*               - Stylesheet
//! GET  /*                      - Product images and downloadable decks
//! ```

pub mod cart;
pub mod checkout;
pub mod pages;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::{
    create_session_layer, make_request_span, request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::cart))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::checkout))
        .route("/complete", post(checkout::complete))
}

/// Create all page and fragment routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::catalogue))
        .route("/products", get(pages::catalogue))
        .route("/product", get(pages::product))
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
}

/// Build the full application: routes, assets, and the middleware stack.
///
/// Sentry layers are added by the binary, outside this router.
pub fn app(state: AppState) -> Router {
    let config = state.config();
    let session_layer = create_session_layer(config);
    let static_files = ServeDir::new(&config.static_dir);
    let assets = ServeDir::new(&config.assets_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", static_files)
        .fallback_service(assets)
        .layer(session_layer)
        .layer(axum_middleware::from_fn(security_headers_middleware))
        .layer(axum_middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The catalogue is loaded before the
/// listener binds, so there is nothing else to check.
async fn health() -> &'static str {
    "ok"
}

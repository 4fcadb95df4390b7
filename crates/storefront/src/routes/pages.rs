//! Full page route handlers.
//!
//! Every page goes through the same bootstrap: load the visitor's cart, refresh
//! the badge, run all renderers, and render the shared layout with whatever
//! views the page hosts.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::services::CartStore;
use crate::state::AppState;
use crate::storage::SessionStorage;
use crate::views::{Page, PageContext, RenderedPage, bootstrap};

/// Query parameters for the product detail page, in request order.
///
/// Kept as raw pairs so repeated or unexpected parameters never reject the
/// request; the first `id` wins.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ProductQuery(pub Vec<(String, String)>);

impl ProductQuery {
    /// The first `id` parameter, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0
            .iter()
            .find_map(|(key, value)| (key == "id").then_some(value.as_str()))
    }
}

/// Shared page layout.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub title: &'static str,
    pub page: RenderedPage,
}

async fn render_page(
    state: &AppState,
    session: Session,
    page: Page,
    product_id: Option<&str>,
) -> Result<PageTemplate> {
    let cart = CartStore::new(SessionStorage::new(session)).load().await?;
    let rendered = bootstrap(
        page,
        PageContext {
            catalogue: state.catalogue(),
            cart: &cart,
            product_id,
        },
    );

    Ok(PageTemplate {
        title: page.title(),
        page: rendered,
    })
}

/// Display the catalogue page.
#[instrument(skip(state, session))]
pub async fn catalogue(State(state): State<AppState>, session: Session) -> Result<PageTemplate> {
    render_page(&state, session, Page::Catalogue, None).await
}

/// Display a single product, selected by `?id=`.
#[instrument(skip(state, session))]
pub async fn product(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ProductQuery>,
) -> Result<PageTemplate> {
    render_page(&state, session, Page::ProductDetail, query.id()).await
}

/// Display the cart page.
#[instrument(skip(state, session))]
pub async fn cart(State(state): State<AppState>, session: Session) -> Result<PageTemplate> {
    render_page(&state, session, Page::Cart, None).await
}

/// Display the checkout page.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Result<PageTemplate> {
    render_page(&state, session, Page::Checkout, None).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalogue::bundled;
    use lectio_core::{Cart, ProductId};

    fn template(page: Page, cart: &Cart, product_id: Option<&str>) -> String {
        let catalogue = bundled().unwrap();
        PageTemplate {
            title: page.title(),
            page: bootstrap(
                page,
                PageContext {
                    catalogue: &catalogue,
                    cart,
                    product_id,
                },
            ),
        }
        .render()
        .unwrap()
    }

    #[test]
    fn test_catalogue_page_markup() {
        let html = template(Page::Catalogue, &Cart::new(), None);
        assert!(html.contains(r#"id="products-container""#));
        assert!(html.contains("Bài giảng Mùa Chay"));
        assert!(html.contains("10.00 USD"));
        assert!(html.contains("Miễn phí"));
        assert!(html.contains(r#"href="/advent.pptx""#));
        assert!(!html.contains(r#"id="cart-table-body""#));
    }

    #[test]
    fn test_cart_page_rerender_is_identical() {
        let mut cart = Cart::new();
        cart.set_quantity(ProductId::new("lent"), 2);
        cart.set_quantity(ProductId::new("advent"), 1);

        let first = template(Page::Cart, &cart, None);
        let second = template(Page::Cart, &cart, None);
        assert_eq!(first, second);
        assert!(first.contains("Tổng cộng: 20.00 USD"));
    }

    #[test]
    fn test_detail_not_found_markup() {
        let html = template(Page::ProductDetail, &Cart::new(), Some("pentecost"));
        assert!(html.contains(r#"id="product-detail""#));
        assert!(html.contains("Không tìm thấy sản phẩm."));
    }

    #[test]
    fn test_product_query_takes_first_id() {
        let query: ProductQuery =
            query_of(&[("ref", "nav"), ("id", "lent"), ("id", "easter")]);
        assert_eq!(query.id(), Some("lent"));
        assert_eq!(ProductQuery::default().id(), None);
    }

    fn query_of(pairs: &[(&str, &str)]) -> ProductQuery {
        ProductQuery(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_catalogue_sections_carry_category_ids() {
        let html = template(Page::Catalogue, &Cart::new(), None);
        for category in ["Mùa Vọng", "Giáng Sinh", "Mùa Chay", "Phục Sinh"] {
            assert!(html.contains(&format!(r#"<section id="{category}""#)));
        }
    }

    #[test]
    fn test_checkout_page_markup() {
        let html = template(Page::Checkout, &Cart::new(), None);
        assert!(html.contains(r#"id="checkout-table-body""#));
        assert!(html.contains("Tổng cộng: 0.00 USD"));
        assert!(html.contains(r#"id="complete-order""#));
        assert!(html.contains(r#"id="order-message""#));
    }
}

//! Page bootstrap: refresh the cart badge, then run every renderer.

use lectio_core::{Cart, Catalogue};

use super::{
    CartTableView, CatalogueView, CheckoutView, Containers, Page, ProductDetailView, render_cart,
    render_catalogue, render_checkout, render_product_detail,
};

/// Everything a renderer may read.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub catalogue: &'a Catalogue,
    pub cart: &'a Cart,
    /// The `id` query parameter, if any.
    pub product_id: Option<&'a str>,
}

/// Output of one bootstrap pass; `None` marks a view the page does not host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub page: Page,
    pub cart_count: Option<u32>,
    pub catalogue: Option<CatalogueView>,
    pub product_detail: Option<ProductDetailView>,
    pub cart: Option<CartTableView>,
    pub checkout: Option<CheckoutView>,
}

/// Badge value for the page, if it has a `cart-count` element.
#[must_use]
pub fn refresh_count_indicator(containers: &Containers, cart: &Cart) -> Option<u32> {
    containers.cart_count.then(|| cart.item_count())
}

/// Render a hosting page.
///
/// All four renderers run unconditionally; each decides from the page's
/// containers whether it produces anything.
#[must_use]
pub fn bootstrap(page: Page, ctx: PageContext<'_>) -> RenderedPage {
    let containers = page.containers();
    RenderedPage {
        page,
        cart_count: refresh_count_indicator(&containers, ctx.cart),
        catalogue: render_catalogue(&containers, ctx.catalogue),
        product_detail: render_product_detail(&containers, ctx.catalogue, ctx.product_id),
        cart: render_cart(&containers, ctx.catalogue, ctx.cart),
        checkout: render_checkout(&containers, ctx.catalogue, ctx.cart),
    }
}

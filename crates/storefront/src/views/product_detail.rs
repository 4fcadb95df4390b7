//! Single product renderer.

use lectio_core::Catalogue;

use super::{Containers, ProductCard, messages};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetailView {
    pub product: Option<ProductCard>,
    /// Set when the requested id is missing or unknown.
    pub message: Option<&'static str>,
}

/// Render the product selected by the `id` query parameter.
///
/// Returns `None` if the page has no `product-detail` container.
#[must_use]
pub fn render_product_detail(
    containers: &Containers,
    catalogue: &Catalogue,
    product_id: Option<&str>,
) -> Option<ProductDetailView> {
    if !containers.product_detail {
        return None;
    }

    let view = match product_id.and_then(|id| catalogue.find(id)) {
        Some(product) => ProductDetailView {
            product: Some(ProductCard::from(product)),
            message: None,
        },
        None => ProductDetailView {
            product: None,
            message: Some(messages::PRODUCT_NOT_FOUND),
        },
    };
    Some(view)
}

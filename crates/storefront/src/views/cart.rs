//! Cart table renderer.

use lectio_core::{Cart, Catalogue};

use super::{Containers, asset_href, total_label, unit_price_label};

/// One editable cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartTableView {
    pub rows: Vec<CartRow>,
    pub total_label: String,
}

/// Render the cart table and grand total.
///
/// Entries whose product is not in the catalogue are skipped and add nothing
/// to the total. Returns `None` unless the page has both `cart-table-body` and
/// `cart-total`.
#[must_use]
pub fn render_cart(
    containers: &Containers,
    catalogue: &Catalogue,
    cart: &Cart,
) -> Option<CartTableView> {
    if !(containers.cart_table_body && containers.cart_total) {
        return None;
    }

    let rows = cart
        .resolve(catalogue)
        .map(|(product, quantity)| CartRow {
            product_id: product.id.to_string(),
            name: product.name.clone(),
            image: asset_href(&product.image),
            unit_price: unit_price_label(&product.price),
            quantity,
            line_total: product.price.times(quantity).display(),
        })
        .collect();

    Some(CartTableView {
        rows,
        total_label: total_label(&cart.total(catalogue)),
    })
}

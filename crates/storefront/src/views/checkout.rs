//! Checkout renderer.
//!
//! Read-only rows and total, plus the completion control. Completing checkout
//! is the only state change reachable from this view.

use lectio_core::{Cart, Catalogue};

use super::{Containers, messages, total_label, unit_price_label};

/// Route the completion control posts to.
pub const COMPLETE_ACTION: &str = "/checkout/complete";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRow {
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub rows: Vec<CheckoutRow>,
    /// Empty once checkout completes.
    pub total_label: String,
    /// Completion action bound to `complete-order`, when the page has it.
    pub complete_action: Option<&'static str>,
    /// Whether the page has an `order-message` area.
    pub message_area: bool,
    pub message: Option<&'static str>,
}

/// Render the checkout table and bind the completion action.
///
/// Returns `None`, skipping the binding too, unless the page has both
/// `checkout-table-body` and `checkout-total`.
#[must_use]
pub fn render_checkout(
    containers: &Containers,
    catalogue: &Catalogue,
    cart: &Cart,
) -> Option<CheckoutView> {
    if !(containers.checkout_table_body && containers.checkout_total) {
        return None;
    }

    let rows = cart
        .resolve(catalogue)
        .map(|(product, quantity)| CheckoutRow {
            name: product.name.clone(),
            unit_price: unit_price_label(&product.price),
            quantity,
            line_total: product.price.times(quantity).display(),
        })
        .collect();

    Some(CheckoutView {
        rows,
        total_label: total_label(&cart.total(catalogue)),
        complete_action: containers.complete_order.then_some(COMPLETE_ACTION),
        message_area: containers.order_message,
        message: None,
    })
}

/// The checkout view after completion: no rows, no total, thank-you message.
///
/// The message is skipped when the page has no message area.
#[must_use]
pub fn complete_checkout_view(containers: &Containers) -> Option<CheckoutView> {
    if !(containers.checkout_table_body && containers.checkout_total) {
        return None;
    }

    Some(CheckoutView {
        rows: Vec::new(),
        total_label: String::new(),
        complete_action: containers.complete_order.then_some(COMPLETE_ACTION),
        message_area: containers.order_message,
        message: containers
            .order_message
            .then_some(messages::ORDER_THANK_YOU),
    })
}

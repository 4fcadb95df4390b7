//! Page renderers.
//!
//! Every page is served by the same layout. A hosting [`Page`] declares which
//! containers it carries; each renderer checks for its containers and returns
//! `None` when they are absent, so one bootstrap pass produces exactly the
//! views the page needs. Renderers rebuild their view from scratch on every
//! call, so rendering unchanged state twice yields identical output.
//!
//! # Element ids
//!
//! ```text
//! cart-count            cart badge (every page)
//! products-container    catalogue listing
//! product-detail        single product
//! cart-table-body       cart rows
//! cart-total            cart grand total
//! checkout-table-body   checkout rows
//! checkout-total        checkout grand total
//! complete-order        checkout completion control
//! order-message         checkout thank-you message
//! ```

pub mod bootstrap;
pub mod cart;
pub mod catalogue;
pub mod checkout;
pub mod product_detail;

use lectio_core::{Price, Product};

pub use bootstrap::{PageContext, RenderedPage, bootstrap, refresh_count_indicator};
pub use cart::{CartRow, CartTableView, render_cart};
pub use catalogue::{CatalogueView, CategorySection, ProductCard, render_catalogue};
pub use checkout::{CheckoutRow, CheckoutView, complete_checkout_view, render_checkout};
pub use product_detail::{ProductDetailView, render_product_detail};

/// User-facing copy.
pub mod messages {
    /// Price label for free items on cards and the detail page.
    pub const FREE: &str = "Miễn phí";
    /// Unit price shown for free items in cart and checkout rows.
    pub const FREE_UNIT_PRICE: &str = "0";
    /// Prefix of the grand-total line.
    pub const TOTAL_PREFIX: &str = "Tổng cộng: ";
    /// Acknowledgement after adding to the cart.
    pub const ADDED_TO_CART: &str = "Đã thêm vào giỏ hàng!";
    /// Detail page message for an unknown product id.
    pub const PRODUCT_NOT_FOUND: &str = "Không tìm thấy sản phẩm.";
    /// Message shown once checkout completes.
    pub const ORDER_THANK_YOU: &str =
        "Cảm ơn bạn đã đặt hàng! Chúng tôi sẽ liên hệ với bạn để xác nhận.";
}

/// Containers present on a hosting page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Containers {
    pub cart_count: bool,
    pub products: bool,
    pub product_detail: bool,
    pub cart_table_body: bool,
    pub cart_total: bool,
    pub checkout_table_body: bool,
    pub checkout_total: bool,
    pub complete_order: bool,
    pub order_message: bool,
}

/// The storefront's hosting pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Catalogue,
    ProductDetail,
    Cart,
    Checkout,
}

impl Page {
    /// Containers the page's markup carries.
    #[must_use]
    pub const fn containers(self) -> Containers {
        let base = Containers {
            cart_count: true,
            products: false,
            product_detail: false,
            cart_table_body: false,
            cart_total: false,
            checkout_table_body: false,
            checkout_total: false,
            complete_order: false,
            order_message: false,
        };
        match self {
            Self::Catalogue => Containers {
                products: true,
                ..base
            },
            Self::ProductDetail => Containers {
                product_detail: true,
                ..base
            },
            Self::Cart => Containers {
                cart_table_body: true,
                cart_total: true,
                ..base
            },
            Self::Checkout => Containers {
                checkout_table_body: true,
                checkout_total: true,
                complete_order: true,
                order_message: true,
                ..base
            },
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Catalogue => "Sản phẩm",
            Self::ProductDetail => "Chi tiết sản phẩm",
            Self::Cart => "Giỏ hàng",
            Self::Checkout => "Thanh toán",
        }
    }
}

/// Card price label: `"10.00 USD"`, or the free label.
#[must_use]
pub fn price_label(price: &Price) -> String {
    if price.is_free() {
        messages::FREE.to_owned()
    } else {
        price.display()
    }
}

/// Unit price label in cart and checkout rows.
#[must_use]
pub fn unit_price_label(price: &Price) -> String {
    if price.is_free() {
        messages::FREE_UNIT_PRICE.to_owned()
    } else {
        price.display()
    }
}

/// Grand-total line, e.g. `"Tổng cộng: 20.00 USD"`.
#[must_use]
pub fn total_label(total: &Price) -> String {
    format!("{}{total}", messages::TOTAL_PREFIX)
}

/// Site-root href for an asset path from the catalogue.
#[must_use]
pub fn asset_href(path: &str) -> String {
    if path.starts_with('/') || path.starts_with("http://") || path.starts_with("https://") {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Detail page href for a product, with the id form-encoded.
#[must_use]
pub fn detail_href(product: &Product) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("id", product.id.as_str())
        .finish();
    format!("/product?{query}")
}

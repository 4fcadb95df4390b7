//! Integration tests for full pages, checkout, and the HTTP surface.

use axum::http::StatusCode;
use lectio_integration_tests::Browser;
use lectio_storefront::middleware::REQUEST_ID_HEADER;

// =============================================================================
// Catalogue and detail
// =============================================================================

#[tokio::test]
async fn test_catalogue_groups_by_category() {
    let mut browser = Browser::new();
    let page = browser.get("/").await;
    assert_eq!(page.status, StatusCode::OK);

    let headings: Vec<usize> = ["Mùa Vọng", "Giáng Sinh", "Mùa Chay", "Phục Sinh"]
        .iter()
        .map(|name| {
            page.body
                .find(&format!("<h2>{name}</h2>"))
                .expect("category heading")
        })
        .collect();
    assert!(headings.is_sorted());
}

#[tokio::test]
async fn test_catalogue_actions_depend_on_price() {
    let mut browser = Browser::new();
    let page = browser.get("/products").await;

    assert!(page.body.contains("Miễn phí"));
    assert!(page.body.contains(r#"href="/christmas.pptx" download"#));
    assert!(page.body.contains(r#"value="easter""#));
    assert!(!page.body.contains(r#"value="advent""#));
    assert!(page.body.contains(r#"href="/product?id=lent""#));
}

#[tokio::test]
async fn test_product_detail() {
    let mut browser = Browser::new();
    let page = browser.get("/product?id=easter").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("<h2>Bài giảng Phục Sinh</h2>"));
    assert!(page.body.contains("15.00 USD"));
    assert!(page.body.contains("Thêm vào giỏ hàng"));
}

#[tokio::test]
async fn test_free_product_detail_offers_download() {
    let mut browser = Browser::new();
    let page = browser.get("/product?id=advent").await;

    assert!(page.body.contains("Tải xuống miễn phí"));
    assert!(page.body.contains(r#"href="/advent.pptx""#));
}

#[tokio::test]
async fn test_product_detail_not_found() {
    let mut browser = Browser::new();

    let unknown = browser.get("/product?id=pentecost").await;
    assert_eq!(unknown.status, StatusCode::OK);
    assert!(unknown.body.contains("Không tìm thấy sản phẩm."));

    let missing = browser.get("/product").await;
    assert!(missing.body.contains("Không tìm thấy sản phẩm."));
}

#[tokio::test]
async fn test_repeated_id_uses_first_value() {
    let mut browser = Browser::new();
    let page = browser.get("/product?id=lent&id=easter").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("<h2>Bài giảng Mùa Chay</h2>"));
    assert!(!page.body.contains("<h2>Bài giảng Phục Sinh</h2>"));
}

#[tokio::test]
async fn test_category_sections_are_anchorable() {
    let mut browser = Browser::new();
    let page = browser.get("/").await;
    assert!(page.body.contains(r#"<section id="Mùa Chay""#));
    assert!(page.body.contains(r#"<section id="Phục Sinh""#));
}

#[tokio::test]
async fn test_badge_shown_on_every_page() {
    let mut browser = Browser::new();
    browser.add("lent").await;

    for uri in ["/", "/product?id=lent", "/cart", "/checkout"] {
        let page = browser.get(uri).await;
        assert!(
            page.body.contains(r#"id="cart-count""#),
            "badge missing on {uri}"
        );
    }
}

#[tokio::test]
async fn test_rerender_is_identical() {
    let mut browser = Browser::new();
    browser.add("lent").await;
    browser.add("advent").await;

    let first = browser.get("/cart").await;
    let second = browser.get("/cart").await;
    assert_eq!(first.body, second.body);
}

// =============================================================================
// Checkout
// =============================================================================

#[tokio::test]
async fn test_empty_checkout() {
    let mut browser = Browser::new();
    let page = browser.get("/checkout").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Tổng cộng: 0.00 USD"));
    assert!(page.body.contains(r#"id="complete-order""#));
    assert_eq!(browser.cart_count().await, "0");
}

#[tokio::test]
async fn test_checkout_lists_cart() {
    let mut browser = Browser::new();
    browser.add("lent").await;
    browser.add("lent").await;
    browser.add("easter").await;

    let page = browser.get("/checkout").await;
    assert!(page.body.contains("<td>2</td>"));
    assert!(page.body.contains("Tổng cộng: 35.00 USD"));
}

#[tokio::test]
async fn test_complete_order_clears_cart() {
    let mut browser = Browser::new();
    browser.add("lent").await;
    browser.add("easter").await;

    let done = browser.post_form("/checkout/complete", "").await;
    assert_eq!(done.status, StatusCode::OK);
    assert_eq!(done.header("hx-trigger"), Some("cart-updated"));
    assert!(
        done.body
            .contains("Cảm ơn bạn đã đặt hàng! Chúng tôi sẽ liên hệ với bạn để xác nhận.")
    );
    assert!(done.body.contains(r#"<p id="checkout-total" class="total"></p>"#));
    assert!(!done.body.contains("Bài giảng Mùa Chay"));

    assert_eq!(browser.cart_count().await, "0");
    let checkout = browser.get("/checkout").await;
    assert!(checkout.body.contains("Tổng cộng: 0.00 USD"));
}

// =============================================================================
// HTTP surface
// =============================================================================

#[tokio::test]
async fn test_health() {
    let mut browser = Browser::new();
    let page = browser.get("/health").await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body, "ok");
}

#[tokio::test]
async fn test_security_headers_and_request_id() {
    let mut browser = Browser::new();
    let page = browser.get("/").await;

    assert_eq!(page.header("x-frame-options"), Some("DENY"));
    assert_eq!(page.header("x-content-type-options"), Some("nosniff"));
    assert!(page.header("content-security-policy").is_some());
    assert!(page.header(REQUEST_ID_HEADER).is_some());
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let mut browser = Browser::new();
    let page = browser.get("/no-such-deck.pptx").await;
    assert_eq!(page.status, StatusCode::NOT_FOUND);
}

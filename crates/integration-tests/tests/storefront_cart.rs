//! Integration tests for cart operations over HTTP.
//!
//! Each test drives the router with one simulated browser profile whose
//! session cookie carries the cart between requests.

use axum::http::StatusCode;
use lectio_integration_tests::Browser;

// =============================================================================
// Add to cart
// =============================================================================

#[tokio::test]
async fn test_add_acknowledges_and_refreshes_badge() {
    let mut browser = Browser::new();

    let page = browser.add("lent").await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.header("hx-trigger"), Some("cart-updated"));
    assert!(page.body.contains("Đã thêm vào giỏ hàng!"));
    assert!(page.body.contains(r#"id="cart-count""#));
    assert!(page.body.contains(r#"hx-swap-oob="true""#));
}

#[tokio::test]
async fn test_adding_twice_increments_quantity() {
    let mut browser = Browser::new();
    browser.add("lent").await;
    browser.add("lent").await;

    let cart = browser.get("/cart").await;
    assert_eq!(cart.status, StatusCode::OK);
    assert!(cart.body.contains(r#"value="2""#));
    assert!(cart.body.contains("10.00 USD"));
    assert!(cart.body.contains("Tổng cộng: 20.00 USD"));
    assert_eq!(browser.cart_count().await, "2");
}

#[tokio::test]
async fn test_free_item_in_cart_shows_zero_unit_price() {
    let mut browser = Browser::new();
    browser.add("advent").await;
    browser.add("lent").await;
    browser.add("lent").await;

    let cart = browser.get("/cart").await;
    assert!(cart.body.contains("<td>0</td>"));
    assert!(cart.body.contains("0.00 USD"));
    assert!(cart.body.contains("Tổng cộng: 20.00 USD"));
    assert_eq!(browser.cart_count().await, "3");
}

#[tokio::test]
async fn test_unknown_product_counts_but_is_not_rendered() {
    let mut browser = Browser::new();
    browser.add("retired").await;

    assert_eq!(browser.cart_count().await, "1");
    let cart = browser.get("/cart").await;
    assert!(!cart.body.contains("retired"));
    assert!(cart.body.contains("Tổng cộng: 0.00 USD"));
}

#[tokio::test]
async fn test_rows_follow_insertion_order() {
    let mut browser = Browser::new();
    browser.add("easter").await;
    browser.add("lent").await;

    let cart = browser.get("/cart").await;
    let easter = cart.body.find("Bài giảng Phục Sinh").expect("easter row");
    let lent = cart.body.find("Bài giảng Mùa Chay").expect("lent row");
    assert!(easter < lent);
}

// =============================================================================
// Quantity changes
// =============================================================================

#[tokio::test]
async fn test_update_sets_exact_quantity() {
    let mut browser = Browser::new();
    browser.add("lent").await;

    let page = browser
        .post_form("/cart/update", "product_id=lent&quantity=3")
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.header("hx-trigger"), Some("cart-updated"));
    assert!(page.body.contains(r#"value="3""#));
    assert!(page.body.contains("Tổng cộng: 30.00 USD"));
    assert_eq!(browser.cart_count().await, "3");
}

#[tokio::test]
async fn test_quantity_form_posts_product_id_field() {
    let mut browser = Browser::new();
    browser.add("lent").await;

    let cart = browser.get("/cart").await;
    assert!(
        cart.body
            .contains(r#"<input type="hidden" name="product_id" value="lent">"#)
    );
    assert!(!cart.body.contains("hx-vals"));
}

#[tokio::test]
async fn test_update_to_zero_removes_item() {
    let mut browser = Browser::new();
    browser.add("lent").await;
    browser.add("easter").await;

    let page = browser
        .post_form("/cart/update", "product_id=lent&quantity=0")
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(!page.body.contains("Bài giảng Mùa Chay"));
    assert!(page.body.contains("Tổng cộng: 15.00 USD"));
    assert_eq!(browser.cart_count().await, "1");
}

#[tokio::test]
async fn test_update_negative_removes_item() {
    let mut browser = Browser::new();
    browser.add("lent").await;

    browser
        .post_form("/cart/update", "product_id=lent&quantity=-4")
        .await;
    assert_eq!(browser.cart_count().await, "0");
}

#[tokio::test]
async fn test_update_truncates_decimal_input() {
    let mut browser = Browser::new();
    browser.add("lent").await;

    let page = browser
        .post_form("/cart/update", "product_id=lent&quantity=2.7")
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(browser.cart_count().await, "2");
}

#[tokio::test]
async fn test_update_rejects_non_numeric_quantity() {
    let mut browser = Browser::new();
    browser.add("lent").await;

    let page = browser
        .post_form("/cart/update", "product_id=lent&quantity=abc")
        .await;
    assert_eq!(page.status, StatusCode::BAD_REQUEST);
    assert_eq!(browser.cart_count().await, "1");
}

// =============================================================================
// Remove
// =============================================================================

#[tokio::test]
async fn test_remove_present_item() {
    let mut browser = Browser::new();
    browser.add("lent").await;
    browser.add("easter").await;

    let page = browser.post_form("/cart/remove", "product_id=easter").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(!page.body.contains("Bài giảng Phục Sinh"));
    assert!(page.body.contains("Tổng cộng: 10.00 USD"));
    assert_eq!(browser.cart_count().await, "1");
}

#[tokio::test]
async fn test_remove_absent_item_is_no_content() {
    let mut browser = Browser::new();
    browser.add("lent").await;

    let page = browser.post_form("/cart/remove", "product_id=easter").await;
    assert_eq!(page.status, StatusCode::NO_CONTENT);
    assert!(page.body.is_empty());
    assert_eq!(browser.cart_count().await, "1");
}

// =============================================================================
// Sharing
// =============================================================================

#[tokio::test]
async fn test_profiles_have_separate_carts() {
    let mut first = Browser::new();
    first.add("lent").await;

    let mut second = first.fresh_profile();
    assert_eq!(second.cart_count().await, "0");
    assert_eq!(first.cart_count().await, "1");
}

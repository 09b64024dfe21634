//! End-to-end cart flow tests driving the storefront router in-process.
//!
//! Assertions match on apostrophe-free name fragments because rendered
//! output is HTML-escaped.

use axum::http::StatusCode;

use trendora_core::{format_rupees, parse_price};
use trendora_integration_tests::{get, post_form, test_app};

const JACKET: [(&str, &str); 3] = [
    ("name", "Men's Denim Jacket"),
    ("price_text", "₹1,499"),
    ("img", "/static/img/mens-denim-jacket.svg"),
];

const MUG: [(&str, &str); 3] = [
    ("name", "Ceramic Mug"),
    ("price_text", "₹349"),
    ("img", "/static/img/ceramic-mug.svg"),
];

const SNEAKERS: [(&str, &str); 3] = [
    ("name", "Running Sneakers"),
    ("price_text", "₹2,199"),
    ("img", "/static/img/running-sneakers.svg"),
];

#[tokio::test]
async fn test_cart_page_starts_empty() {
    let app = test_app();

    let resp = get(&app, "/cart", None).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Your cart is empty."));
    // Summary renders zeroed totals for an empty cart
    assert!(resp.body.contains("₹0"));
}

#[tokio::test]
async fn test_count_without_session_is_zero() {
    let app = test_app();

    let resp = get(&app, "/cart/count", None).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body.trim(), "0");
}

#[tokio::test]
async fn test_add_returns_toast_and_badge_trigger() {
    let app = test_app();

    let resp = post_form(&app, "/cart/add", &JACKET, None).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.trigger.as_deref(), Some("cart-updated"));
    assert!(resp.body.contains("Added to cart"));
    assert!(resp.session_cookie.is_some());
}

#[tokio::test]
async fn test_add_then_cart_page_lists_item() {
    let app = test_app();

    let added = post_form(&app, "/cart/add", &JACKET, None).await;
    let cookie = added.session_cookie.expect("session cookie issued");

    let resp = get(&app, "/cart", Some(&cookie)).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Denim Jacket"));
    // Item price is re-formatted from the stored amount
    assert!(resp.body.contains("₹1,499"));
    // Subtotal 1499 + flat shipping 49
    assert!(resp.body.contains("₹49"));
    assert!(resp.body.contains("₹1,548"));
}

#[tokio::test]
async fn test_repeat_add_merges_into_one_line() {
    let app = test_app();

    let added = post_form(&app, "/cart/add", &JACKET, None).await;
    let cookie = added.session_cookie.expect("session cookie issued");
    post_form(&app, "/cart/add", &JACKET, Some(&cookie)).await;

    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert_eq!(count.body.trim(), "2");

    let cart = get(&app, "/cart", Some(&cookie)).await;
    // One line with quantity 2, not two lines
    assert_eq!(cart.body.matches("qty-value").count(), 1);
    assert!(cart.body.contains(r#"<span class="qty-value">2</span>"#));
}

#[tokio::test]
async fn test_quantity_clamps_at_one() {
    let app = test_app();

    let added = post_form(&app, "/cart/add", &JACKET, None).await;
    let cookie = added.session_cookie.expect("session cookie issued");
    post_form(&app, "/cart/add", &JACKET, Some(&cookie)).await;

    let resp = post_form(
        &app,
        "/cart/update",
        &[("index", "0"), ("delta", "-5")],
        Some(&cookie),
    )
    .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.trigger.as_deref(), Some("cart-updated"));
    assert!(resp.body.contains(r#"<span class="qty-value">1</span>"#));
}

#[tokio::test]
async fn test_update_out_of_range_is_noop() {
    let app = test_app();

    let added = post_form(&app, "/cart/add", &JACKET, None).await;
    let cookie = added.session_cookie.expect("session cookie issued");

    let resp = post_form(
        &app,
        "/cart/update",
        &[("index", "9"), ("delta", "1")],
        Some(&cookie),
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);

    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert_eq!(count.body.trim(), "1");
}

#[tokio::test]
async fn test_remove_empties_cart() {
    let app = test_app();

    let added = post_form(&app, "/cart/add", &JACKET, None).await;
    let cookie = added.session_cookie.expect("session cookie issued");

    let resp = post_form(&app, "/cart/remove", &[("index", "0")], Some(&cookie)).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Your cart is empty."));

    let count = get(&app, "/cart/count", Some(&cookie)).await;
    assert_eq!(count.body.trim(), "0");
}

#[tokio::test]
async fn test_remove_first_line_keeps_second() {
    let app = test_app();

    let added = post_form(&app, "/cart/add", &MUG, None).await;
    let cookie = added.session_cookie.expect("session cookie issued");
    post_form(&app, "/cart/add", &SNEAKERS, Some(&cookie)).await;

    let resp = post_form(&app, "/cart/remove", &[("index", "0")], Some(&cookie)).await;

    assert!(!resp.body.contains("Ceramic Mug"));
    assert!(resp.body.contains("Running Sneakers"));
}

#[tokio::test]
async fn test_summary_totals_across_lines() {
    let app = test_app();

    let added = post_form(&app, "/cart/add", &MUG, None).await;
    let cookie = added.session_cookie.expect("session cookie issued");
    post_form(&app, "/cart/add", &SNEAKERS, Some(&cookie)).await;

    let resp = get(&app, "/cart", Some(&cookie)).await;

    // 349 + 2199 subtotal, flat 49 shipping
    assert!(resp.body.contains("₹2,548"));
    assert!(resp.body.contains("₹49"));

    let expected_total = format_rupees(parse_price("₹349") + parse_price("₹2,199") + parse_price("₹49"));
    assert_eq!(expected_total, "₹2,597");
    assert!(resp.body.contains(&expected_total));
}

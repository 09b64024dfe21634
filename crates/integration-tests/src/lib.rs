//! Shared harness for Trendora integration tests.
//!
//! Builds the storefront router in-process so tests can drive it through
//! `tower::ServiceExt::oneshot` without binding a socket. The session layer
//! is real; helpers thread the session cookie between requests the way a
//! browser would.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header, request};
use tower::ServiceExt;

use trendora_storefront::catalog::{Catalog, Product};
use trendora_storefront::config::StorefrontConfig;
use trendora_storefront::middleware;
use trendora_storefront::routes;
use trendora_storefront::state::AppState;

/// Fixed product fixtures, one per category.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    let card = |name: &str, price: &str, img: &str| Product {
        name: name.to_string(),
        price_text: price.to_string(),
        img: img.to_string(),
    };

    vec![
        card(
            "Men's Denim Jacket",
            "₹1,499",
            "/static/img/mens-denim-jacket.svg",
        ),
        card(
            "Floral Summer Dress",
            "₹1,299",
            "/static/img/floral-summer-dress.svg",
        ),
        card(
            "Running Sneakers",
            "₹2,199",
            "/static/img/running-sneakers.svg",
        ),
        card("Ceramic Mug", "₹349", "/static/img/ceramic-mug.svg"),
    ]
}

/// Build the storefront router over the sample catalog.
///
/// Each call creates a fresh in-memory session store; clone the returned
/// router for every request so all requests in a test share that store.
#[must_use]
pub fn test_app() -> Router {
    let config = StorefrontConfig {
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        content_dir: std::path::PathBuf::from("content"),
    };

    let session_layer = middleware::create_session_layer(&config);
    let state = AppState::new(config, Catalog::from_products(sample_products()));

    Router::new()
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(state)
}

/// A captured response.
pub struct TestResponse {
    pub status: StatusCode,
    /// First `Set-Cookie` pair, ready to send back as a `Cookie` header.
    pub session_cookie: Option<String>,
    /// Value of the `HX-Trigger` response header, if any.
    pub trigger: Option<String>,
    pub body: String,
}

/// Perform a GET request, optionally with a session cookie.
pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    let builder = Request::builder().method("GET").uri(uri);
    send(app, builder, Body::empty(), cookie).await
}

/// Perform a form POST, optionally with a session cookie.
pub async fn post_form(
    app: &Router,
    uri: &str,
    fields: &[(&str, &str)],
    cookie: Option<&str>,
) -> TestResponse {
    let body = serde_urlencoded::to_string(fields).expect("encode form body");
    let builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    send(app, builder, Body::from(body), cookie).await
}

async fn send(
    app: &Router,
    mut builder: request::Builder,
    body: Body,
    cookie: Option<&str>,
) -> TestResponse {
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(body).expect("build request");

    let response = app.clone().oneshot(request).await.expect("router call");

    let status = response.status();
    let session_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(ToString::to_string);
    let trigger = response
        .headers()
        .get("HX-Trigger")
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    let body = String::from_utf8(bytes.to_vec()).expect("utf8 response body");

    TestResponse {
        status,
        session_cookie,
        trigger,
        body,
    }
}

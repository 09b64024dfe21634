//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to the shop grid
//! GET  /health                 - Health check (registered in main)
//!
//! # Shop
//! GET  /shop                   - Product grid, optional ?category= filter
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (toast fragment, triggers cart-updated)
//! POST /cart/update            - Change line quantity (cart_items fragment)
//! POST /cart/remove            - Remove line (cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//! ```

pub mod cart;
pub mod shop;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the shop routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new().route("/", get(shop::index))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // The storefront front door is the shop grid
        .route("/", get(|| async { Redirect::to("/shop") }))
        // Shop routes
        .nest("/shop", shop_routes())
        // Cart routes
        .nest("/cart", cart_routes())
}

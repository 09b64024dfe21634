//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart document is stored in the session under a single well-known key
//! and re-read before every mutation; quantity and remove operations address
//! lines by positional index, which is safe because each mutation response
//! re-renders the full list, so indices in the document always come from the
//! just-read state. Every mutation response carries the `cart-updated`
//! trigger so the navbar badge re-fetches its count.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use trendora_core::{Cart, CartItem, OrderSummary};

use crate::filters;
use crate::models::session_keys;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    /// Position in the current list; mutation forms post this back.
    pub index: usize,
    pub name: String,
    pub price: Decimal,
    pub img: String,
    pub qty: u32,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let OrderSummary {
            subtotal,
            shipping,
            total,
        } = cart.summary();

        Self {
            items: cart
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| CartItemView::from_line(index, item))
                .collect(),
            subtotal,
            shipping,
            total,
        }
    }
}

impl CartItemView {
    fn from_line(index: usize, item: &CartItem) -> Self {
        Self {
            index,
            name: item.name.clone(),
            price: item.price,
            img: item.img.clone(),
            qty: item.qty,
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Read the cart from the session.
///
/// Absent or undecodable state degrades to an empty cart - corrupt state is
/// a silent reset from the shopper's point of view, logged at warn.
async fn read_cart(session: &Session) -> Cart {
    match session.get::<Cart>(session_keys::CART_ITEMS).await {
        Ok(cart) => cart.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Discarding undecodable cart state: {e}");
            Cart::default()
        }
    }
}

/// Persist the cart to the session.
async fn write_cart(session: &Session, cart: &Cart) {
    if let Err(e) = session.insert(session_keys::CART_ITEMS, cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }
}

/// Add to cart form data - the raw fields of the product card.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub name: String,
    pub price_text: String,
    pub img: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub index: usize,
    pub delta: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub index: usize,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Confirmation toast fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub message: &'static str,
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = read_cart(&session).await;

    CartShowTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add item to cart (HTMX).
///
/// Merges into an existing line when the derived identifier matches,
/// otherwise appends a new line. Returns the confirmation toast with a
/// trigger to refresh the cart count badge.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Response {
    let mut cart = read_cart(&session).await;
    cart.add(&form.name, &form.price_text, &form.img);
    write_cart(&session, &cart).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        ToastTemplate {
            message: "Added to cart ✓",
        },
    )
        .into_response()
}

/// Update cart line quantity (HTMX).
///
/// Clamped to a minimum of 1; an out-of-range index is a no-op. Either way
/// the full cart fragment is re-rendered from the stored state.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Response {
    let mut cart = read_cart(&session).await;
    cart.change_qty(form.index, form.delta);
    write_cart(&session, &cart).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response()
}

/// Remove item from cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Response {
    let mut cart = read_cart(&session).await;
    cart.remove(form.index);
    write_cart(&session, &cart).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response()
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = read_cart(&session).await;

    CartCountTemplate {
        count: cart.total_quantity(),
    }
}

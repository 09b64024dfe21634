//! Shop route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use trendora_core::Category;

use crate::catalog::Product;
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub name: String,
    pub price_text: String,
    pub img: String,
    pub category: Category,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price_text: product.price_text.clone(),
            img: product.img.clone(),
            category: product.category(),
        }
    }
}

/// Category filter query parameters.
#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub category: Option<String>,
}

/// Shop grid page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub active_filter: String,
}

/// Display the product grid, optionally filtered by category.
///
/// `men` and `women` select exactly the cards classified into those
/// categories. Any other value - including `all` and `unisex` - shows the
/// full grid.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> impl IntoResponse {
    let active_filter = query.category.unwrap_or_else(|| "all".to_string());

    let products: Vec<ProductCardView> = state
        .catalog()
        .products()
        .iter()
        .map(ProductCardView::from)
        .filter(|card| match active_filter.as_str() {
            "men" => card.category == Category::Men,
            "women" => card.category == Category::Women,
            _ => true,
        })
        .collect();

    ShopIndexTemplate {
        products,
        active_filter,
    }
}

//! Product catalog loaded from the content directory at startup.
//!
//! The catalog is the storefront's product listing: a JSON array of cards
//! (name, formatted price text, image URL), held in memory for the process
//! lifetime. Categories are not part of the data; they are derived from the
//! product title by the classifier whenever the grid is filtered.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use trendora_core::Category;

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A product card as displayed on the shop grid.
///
/// `price` stays a formatted display string; parsing happens once at
/// add-to-cart time, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(rename = "price")]
    pub price_text: String,
    pub img: String,
}

impl Product {
    /// Category derived from the product title.
    #[must_use]
    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }
}

/// Catalog store that holds all products in memory.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Load the catalog from `products.json` in the content directory.
    ///
    /// A missing file degrades to an empty catalog with a warning; the shop
    /// page simply renders no cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(content_dir: &Path) -> Result<Self, CatalogError> {
        let path = content_dir.join("products.json");

        if !path.exists() {
            tracing::warn!("Product catalog does not exist: {:?}", path);
            return Ok(Self::from_products(Vec::new()));
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::info!("Loaded {} products from {:?}", products.len(), path);
        Ok(Self::from_products(products))
    }

    /// Build a catalog from already-materialized products.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// The products in listing order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_shape() {
        let product: Product = serde_json::from_str(
            r#"{"name": "Running Sneakers", "price": "₹2,199", "img": "/static/img/sneakers.svg"}"#,
        )
        .unwrap();

        assert_eq!(product.name, "Running Sneakers");
        assert_eq!(product.price_text, "₹2,199");
        assert_eq!(product.category(), Category::Unisex);
    }

    #[test]
    fn test_load_missing_catalog_degrades_to_empty() {
        let catalog = Catalog::load(Path::new("no-such-content-dir")).unwrap();
        assert!(catalog.products().is_empty());
    }

    #[test]
    fn test_from_products_preserves_order() {
        let products = vec![
            Product {
                name: "Ceramic Mug".to_string(),
                price_text: "₹349".to_string(),
                img: "/static/img/mug.svg".to_string(),
            },
            Product {
                name: "Floral Summer Dress".to_string(),
                price_text: "₹1,299".to_string(),
                img: "/static/img/dress.svg".to_string(),
            },
        ];

        let catalog = Catalog::from_products(products);
        assert_eq!(catalog.products().len(), 2);
        assert_eq!(catalog.products()[0].name, "Ceramic Mug");
    }
}

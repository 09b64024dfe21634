//! Cart records, mutation operations, and the order summary.
//!
//! A [`Cart`] is an ordered list of [`CartItem`]s, insertion order preserved.
//! Every mutation is a pure in-memory transformation; persistence and
//! re-rendering are the caller's concern. Quantity changes and removals take
//! a positional index into the current list - safe because the presentation
//! layer re-renders the full list after every mutation, so indices are always
//! derived from the just-read state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Category, ItemId, parse_price};

/// Flat shipping fee in rupees, charged on any non-empty cart.
const SHIPPING_FLAT_FEE: u32 = 49;

/// One cart line, keyed by the slug of the product name.
///
/// Name, price, and category are captured once at add-time and never
/// re-derived, even if the product's displayed price changes later.
/// Serde renames keep the persisted field names of the cart document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
    #[serde(rename = "priceText")]
    pub price_text: String,
    pub img: String,
    pub qty: u32,
    pub category: Category,
}

impl CartItem {
    /// Line total for this item.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.qty)
    }
}

/// Derived order totals, recomputed from scratch on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

/// Ordered list of cart items.
///
/// Serialized transparently as a JSON array, the entire persisted state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Build a cart from already-materialized items.
    #[must_use]
    pub const fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// The items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines (not total quantity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all lines, the badge count.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.qty)).sum()
    }

    /// Add a product to the cart.
    ///
    /// The identifier is derived from the name; if a line with that
    /// identifier exists its quantity is incremented and the stored
    /// name/price/category are left untouched. Otherwise a new line with
    /// quantity 1 is appended, with price and category computed here.
    pub fn add(&mut self, name: &str, price_text: &str, img: &str) {
        let id = ItemId::from_name(name);

        if let Some(existing) = self.items.iter_mut().find(|item| item.id == id) {
            existing.qty = existing.qty.saturating_add(1);
            return;
        }

        self.items.push(CartItem {
            id,
            name: name.to_string(),
            price: parse_price(price_text),
            price_text: price_text.to_string(),
            img: img.to_string(),
            qty: 1,
            category: Category::classify(name),
        });
    }

    /// Adjust the quantity of the line at `index` by `delta`, clamped to a
    /// minimum of 1. Out-of-range indices are a no-op.
    ///
    /// Dropping a line is never done through quantity zero; removal is the
    /// separate explicit [`Cart::remove`].
    pub fn change_qty(&mut self, index: usize, delta: i64) {
        if let Some(item) = self.items.get_mut(index) {
            let adjusted = i64::from(item.qty).saturating_add(delta).max(1);
            item.qty = u32::try_from(adjusted).unwrap_or(u32::MAX);
        }
    }

    /// Delete the line at `index`. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Compute subtotal, shipping, and total for the current contents.
    ///
    /// Shipping is a flat fee on any non-empty order; an empty cart owes
    /// nothing.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        let subtotal: Decimal = self.items.iter().map(CartItem::line_total).sum();
        let shipping = if subtotal > Decimal::ZERO {
            Decimal::from(SHIPPING_FLAT_FEE)
        } else {
            Decimal::ZERO
        };

        OrderSummary {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

//! Core types for Trendora.
//!
//! This module provides the normalization primitives the cart is built on.

pub mod category;
pub mod id;
pub mod price;

pub use category::Category;
pub use id::ItemId;
pub use price::{format_rupees, parse_price};

//! Trendora Core - Cart domain library.
//!
//! This crate provides the cart domain shared across all Trendora components:
//! - `storefront` - Public-facing storefront site
//! - `integration-tests` - End-to-end router tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no HTTP,
//! no persistence. Every cart mutation is a plain transformation over an
//! in-memory list, so the whole crate is unit-testable without a running
//! server or a session store.
//!
//! # Modules
//!
//! - [`types`] - Price parsing/formatting, category classification, item IDs
//! - [`cart`] - Cart records, mutation operations, and the order summary

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartItem, OrderSummary};
pub use types::*;

//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::Decimal;

/// Formats a stored amount as rupees with thousands grouping.
///
/// Unparseable input degrades to zero rather than failing the render.
///
/// Usage in templates: `{{ item.price|rupees }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn rupees(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let parsed = amount.to_string().parse::<Decimal>().unwrap_or_default();
    Ok(trendora_core::format_rupees(parsed))
}

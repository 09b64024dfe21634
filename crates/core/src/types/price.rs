//! Price parsing and display formatting.
//!
//! Product cards carry prices as formatted display strings ("₹1,299"). The
//! parser extracts the numeric content once at add-time; the formatter turns
//! stored amounts back into display strings for rendered views.

use rust_decimal::Decimal;

/// Parse a formatted price string into a decimal amount.
///
/// Strips every character that is not an ASCII digit or a decimal point and
/// parses the remainder. Malformed or empty input degrades to zero; this
/// function never fails.
///
/// ```
/// use rust_decimal::Decimal;
/// use trendora_core::parse_price;
///
/// assert_eq!(parse_price("₹1,299"), Decimal::from(1299));
/// assert_eq!(parse_price(""), Decimal::ZERO);
/// ```
#[must_use]
pub fn parse_price(text: &str) -> Decimal {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(Decimal::ZERO)
}

/// Format an amount as rupees with thousands grouping.
///
/// Trailing fractional zeros are dropped, so whole-rupee amounts render
/// without a decimal part ("₹1,299", not "₹1,299.00").
#[must_use]
pub fn format_rupees(amount: Decimal) -> String {
    let text = amount.normalize().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (text.as_str(), None),
    };

    let grouped = group_thousands(int_part);
    frac_part.map_or_else(|| format!("₹{grouped}"), |frac| format!("₹{grouped}.{frac}"))
}

/// Insert a comma before every group of three digits, counted from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && c.is_ascii_digit() && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

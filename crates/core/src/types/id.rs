//! Slug identifiers for cart items.
//!
//! Cart items have no backend-assigned IDs; the identifier is a slug derived
//! from the product name. Deriving it deterministically is what makes the
//! add operation merge repeat adds of the same product into one line.

use serde::{Deserialize, Serialize};

/// URL-safe identifier for a cart item, derived from the product name.
///
/// Two calls with the same name always produce the same identifier, and the
/// derivation is idempotent: feeding a slug back through it is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Derive an identifier from a product display name.
    ///
    /// Lowercases and trims the name, strips straight and curly quotes,
    /// collapses whitespace runs into single hyphens, then drops every
    /// remaining character that is not a word character or hyphen.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let lowered = name.to_lowercase();

        let mut slug = String::with_capacity(lowered.len());
        let mut prev_whitespace = false;
        for c in lowered.trim().chars() {
            if matches!(
                c,
                '\'' | '"' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}'
            ) {
                continue;
            }
            if c.is_whitespace() {
                if !prev_whitespace {
                    slug.push('-');
                }
                prev_whitespace = true;
            } else {
                slug.push(c);
                prev_whitespace = false;
            }
        }
        slug.retain(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        Self(slug)
    }

    /// Get the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_basic() {
        assert_eq!(
            ItemId::from_name("Women's Floral Maxi Dress").as_str(),
            "womens-floral-maxi-dress"
        );
    }

    #[test]
    fn test_from_name_curly_quotes() {
        assert_eq!(
            ItemId::from_name("Men\u{2019}s Denim Jacket").as_str(),
            "mens-denim-jacket"
        );
    }

    #[test]
    fn test_from_name_collapses_whitespace() {
        assert_eq!(
            ItemId::from_name("  Classic   White\tShirt  ").as_str(),
            "classic-white-shirt"
        );
    }

    #[test]
    fn test_from_name_strips_symbols() {
        assert_eq!(
            ItemId::from_name("Tee (Limited Edition!)").as_str(),
            "tee-limited-edition"
        );
    }

    #[test]
    fn test_from_name_is_idempotent() {
        let once = ItemId::from_name("Women's Floral Maxi Dress");
        let twice = ItemId::from_name(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_same_name_same_id() {
        assert_eq!(
            ItemId::from_name("Running Sneakers"),
            ItemId::from_name("Running Sneakers")
        );
    }
}

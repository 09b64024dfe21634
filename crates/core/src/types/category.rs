//! Product category classification.
//!
//! Categories are not stored in the catalog; they are derived from the
//! product title by keyword matching. The keyword lists overlap on purpose
//! ("jacket" is both a men and a unisex keyword) and the lists are checked in
//! a fixed priority order - men, then women, then unisex - so a title
//! matching several lists always resolves to the first. That ordering is the
//! authoritative tie-break; changing it changes the classification of
//! existing carts.

use serde::{Deserialize, Serialize};

/// Keywords checked first. Includes garment words typical of the men's line.
const MEN_KEYWORDS: &[&str] = &[
    "men",
    "man",
    "men's",
    "men s",
    "male",
    "shirt",
    "tee",
    "t-shirt",
    "trouser",
    "jeans",
    "jacket",
    "hoodie",
    "hoodies",
    "sweatshirt",
];

/// Keywords checked second.
const WOMEN_KEYWORDS: &[&str] = &[
    "women",
    "woman",
    "women's",
    "women s",
    "female",
    "dress",
    "saree",
    "kurti",
    "top",
    "skirt",
    "maxi",
    "floral",
    "co-ord",
    "coord",
    "maxi dress",
];

/// Keywords checked last.
const UNISEX_KEYWORDS: &[&str] = &[
    "unisex", "sneaker", "sneakers", "hoodie", "coat", "jacket", "tee", "tshirt", "t-shirt",
];

/// Product category derived from a product title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
    Unisex,
    #[default]
    All,
}

impl Category {
    /// Classify a product title into a category.
    ///
    /// Lowercases the title and returns the label of the first keyword list
    /// containing a substring of it, in men -> women -> unisex order.
    /// Titles matching no list fall back to [`Category::All`].
    #[must_use]
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();

        let matches = |keywords: &[&str]| keywords.iter().any(|k| title.contains(k));

        if matches(MEN_KEYWORDS) {
            Self::Men
        } else if matches(WOMEN_KEYWORDS) {
            Self::Women
        } else if matches(UNISEX_KEYWORDS) {
            Self::Unisex
        } else {
            Self::All
        }
    }

    /// The lowercase label used in persisted carts and filter links.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
            Self::Unisex => "unisex",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

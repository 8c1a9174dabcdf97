//! Normalized skip records and the size-derived display rules.
//!
//! A [`NormalizedSkip`] is the stable contract consumed by presentation and
//! by the permit rule, whichever raw upstream shape it was built from.
//! Optional fields serialize only when present, so normalizing the same
//! input twice produces identical output.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// The single skip size shown with a "popular" badge.
pub const POPULAR_SIZE_YARDS: u32 = 6;

/// Stock photo shown when a record carries no image of its own.
pub const DEFAULT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&h=600";

const SUITABLE_SMALL: [&str; 3] = ["Garden clearance", "Small renovations", "House clearouts"];
const SUITABLE_MEDIUM: [&str; 3] = ["Home renovations", "Garden projects", "Construction waste"];
const SUITABLE_LARGE: [&str; 3] = ["Large construction", "Commercial projects", "Major clearouts"];

/// Fallback feature list for records that carry none of their own.
const DEFAULT_FEATURES: [&str; 3] = [
    "Free delivery & collection",
    "14-day hire period",
    "Same day delivery available",
];

/// A skip offer in the shape the display contract expects.
///
/// Field names serialize in camelCase to match the wire contract. `price` is
/// always VAT-inclusive; for records built from the richer upstream shape it
/// is rounded to a whole currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSkip {
    pub id: i64,
    /// Display name, e.g. `"6 Yard Skip"`.
    pub name: String,
    /// Size token used for display and numeric derivation, e.g. `"6"`.
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    pub price: f64,
    /// Pre-discount price; must exceed `price` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suitable_for: Option<Vec<String>>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl NormalizedSkip {
    /// Parses the yard count out of the size token.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnparseableSize`] when the token has no
    /// leading integer or the count is zero.
    pub fn size_yards(&self) -> Result<u32, ValidationError> {
        parse_size_yards(&self.size)
    }

    /// Checks the record's own invariants: a non-negative price, and a
    /// strictly greater original price when one is present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativePrice`] or
    /// [`ValidationError::OriginalPriceNotGreater`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice {
                id: self.id,
                price: self.price,
            });
        }
        if let Some(original) = self.original_price {
            if original <= self.price {
                return Err(ValidationError::OriginalPriceNotGreater {
                    id: self.id,
                    original_price: original,
                    price: self.price,
                });
            }
        }
        Ok(())
    }

    /// Amount saved against the original price, when there is one.
    #[must_use]
    pub fn savings(&self) -> Option<f64> {
        self.original_price
            .map(|original| original - self.price)
            .filter(|saving| *saving > 0.0)
    }

    /// Suitability tags for display, falling back to the size's bucket
    /// list. A size token with no usable yard count gets the small-skip
    /// tags.
    #[must_use]
    pub fn suitable_for_or_default(&self) -> Vec<String> {
        self.suitable_for.clone().unwrap_or_else(|| {
            owned(self.size_yards().map_or(SUITABLE_SMALL, suitable_for_yards))
        })
    }

    /// Feature list for display, falling back to the stock list.
    #[must_use]
    pub fn features_or_default(&self) -> Vec<String> {
        self.features
            .clone()
            .unwrap_or_else(|| owned(DEFAULT_FEATURES))
    }

    /// Image URL for display, falling back to [`DEFAULT_IMAGE_URL`].
    #[must_use]
    pub fn image_url_or_default(&self) -> &str {
        self.image_url.as_deref().unwrap_or(DEFAULT_IMAGE_URL)
    }
}

/// Suitability tags for a yard count. Eight yards still counts as a
/// home-renovation size; anything above moves to the construction tags.
#[must_use]
pub fn suitable_for_yards(yards: u32) -> [&'static str; 3] {
    if yards <= 4 {
        SUITABLE_SMALL
    } else if yards <= 8 {
        SUITABLE_MEDIUM
    } else {
        SUITABLE_LARGE
    }
}

/// Whether this yard count gets the "popular" badge.
#[must_use]
pub fn is_popular_size(yards: u32) -> bool {
    yards == POPULAR_SIZE_YARDS
}

/// Parses a size token (`"6"`, `"10 Yard"`) into its yard count.
///
/// Reads the leading integer digits after any leading whitespace; a
/// descriptive suffix such as `" Yard"` is ignored.
///
/// # Errors
///
/// Returns [`ValidationError::UnparseableSize`] when the token has no
/// leading integer or the count parses to zero.
pub fn parse_size_yards(size: &str) -> Result<u32, ValidationError> {
    let digits: String = size
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    digits
        .parse::<u32>()
        .ok()
        .filter(|yards| *yards > 0)
        .ok_or_else(|| ValidationError::UnparseableSize {
            size: size.to_string(),
        })
}

fn owned(tags: [&'static str; 3]) -> Vec<String> {
    tags.into_iter().map(String::from).collect()
}

//! Normalization from raw upstream records to [`NormalizedSkip`].
//!
//! One canonical entry point, [`normalize_all`], with two input adapters:
//! the richer [`SkipQuote`] shape gets its display fields derived here,
//! while the already-flattened [`ListedSkip`] shape passes through. Shape
//! detection stays inside this module.

use serde_json::Value;

use skiphire_core::{is_popular_size, suitable_for_yards, NormalizedSkip};

use crate::error::PricingError;
use crate::types::{ListedSkip, SkipQuote};

/// One raw record, classified into whichever accepted shape it matches.
#[derive(Debug)]
enum RawRecord {
    Quote(SkipQuote),
    Listed(ListedSkip),
}

/// Normalizes a whole batch of raw records, in upstream order.
///
/// All-or-nothing: one record that matches no shape or breaks an invariant
/// fails the entire batch, and no partial result is returned. An empty input
/// is an empty output, not an error.
///
/// # Errors
///
/// - [`PricingError::MalformedRecord`] if a record matches neither raw shape.
/// - [`PricingError::InvalidRecord`] if a normalized record fails its
///   invariant checks.
pub fn normalize_all(records: Vec<Value>) -> Result<Vec<NormalizedSkip>, PricingError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let skip = match classify(record, index)? {
                RawRecord::Quote(quote) => normalize_quote(&quote),
                RawRecord::Listed(listed) => normalize_listed(listed),
            };
            skip.validate()
                .map_err(|source| PricingError::InvalidRecord { index, source })?;
            Ok(skip)
        })
        .collect()
}

/// Tries the richer quote shape first, then the display-flattened shape.
fn classify(record: Value, index: usize) -> Result<RawRecord, PricingError> {
    match serde_json::from_value::<SkipQuote>(record.clone()) {
        Ok(quote) => Ok(RawRecord::Quote(quote)),
        Err(_) => serde_json::from_value::<ListedSkip>(record)
            .map(RawRecord::Listed)
            .map_err(|source| PricingError::MalformedRecord { index, source }),
    }
}

/// Builds a [`NormalizedSkip`] from the richer by-location shape.
///
/// Derives every display field from the yard size, the hire period, and the
/// placement flags. `originalPrice` and `imageUrl` are never produced here.
#[must_use]
pub fn normalize_quote(quote: &SkipQuote) -> NormalizedSkip {
    let size = quote.size;
    let road = if quote.allowed_on_road {
        "Road placement allowed"
    } else {
        "Private land only"
    };
    let waste = if quote.allows_heavy_waste {
        "Heavy waste accepted"
    } else {
        "Standard waste only"
    };

    NormalizedSkip {
        id: quote.id,
        name: format!("{size} Yard Skip"),
        size: size.to_string(),
        dimensions: Some(format!("Suitable for {size} cubic yards of waste")),
        capacity: Some(format!("{size} cubic yards")),
        price: vat_inclusive_price(quote.price_before_vat, quote.vat),
        original_price: None,
        image_url: None,
        suitable_for: Some(
            suitable_for_yards(size)
                .into_iter()
                .map(String::from)
                .collect(),
        ),
        is_popular: is_popular_size(size),
        features: Some(vec![
            format!("{}-day hire period", quote.hire_period_days),
            "Free delivery & collection".to_string(),
            road.to_string(),
            waste.to_string(),
        ]),
    }
}

/// Builds a [`NormalizedSkip`] from an already-flattened record.
///
/// Fields pass through unchanged; absent optionals stay absent.
#[must_use]
pub fn normalize_listed(listed: ListedSkip) -> NormalizedSkip {
    NormalizedSkip {
        id: listed.id,
        name: listed.name,
        size: listed.size,
        dimensions: listed.dimensions,
        capacity: listed.capacity,
        price: listed.price,
        original_price: listed.original_price,
        image_url: listed.image_url,
        suitable_for: listed.suitable_for,
        is_popular: listed.is_popular.unwrap_or(false),
        features: listed.features,
    }
}

/// VAT-inclusive price rounded to the nearest whole currency unit, half
/// rounding up.
#[must_use]
pub fn vat_inclusive_price(price_before_vat: f64, vat: f64) -> f64 {
    (price_before_vat * (1.0 + vat / 100.0)).round()
}

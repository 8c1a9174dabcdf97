//! Raw skip records as the upstream pricing API returns them.
//!
//! Two shapes appear in the wild: [`SkipQuote`], the richer by-location
//! pricing record, and [`ListedSkip`], a record that has already been
//! flattened for display. Classification between them happens in
//! [`crate::normalize`]; neither type leaks past the ingestion boundary.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Richer by-location shape
// ---------------------------------------------------------------------------

/// A by-location pricing record: VAT-exclusive price plus placement flags.
///
/// All fields are required; unknown fields are ignored. The cost fields are
/// nullable upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct SkipQuote {
    pub id: i64,
    /// Size in yards.
    pub size: u32,
    pub hire_period_days: u32,
    pub transport_cost: Option<f64>,
    pub per_tonne_cost: Option<f64>,
    pub price_before_vat: f64,
    /// VAT percentage, e.g. `20.0`.
    pub vat: f64,
    pub postcode: String,
    pub area: String,
    pub forbidden: bool,
    /// Opaque upstream timestamp, passed through without parsing.
    pub created_at: String,
    /// Opaque upstream timestamp, passed through without parsing.
    pub updated_at: String,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

// ---------------------------------------------------------------------------
// Display-flattened shape
// ---------------------------------------------------------------------------

/// A record already flattened into the display contract (camelCase keys).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedSkip {
    pub id: i64,
    pub name: String,
    /// Size token, e.g. `"6"` or `"6 Yard"`.
    pub size: String,
    pub price: f64,
    pub dimensions: Option<String>,
    pub capacity: Option<String>,
    pub original_price: Option<f64>,
    pub image_url: Option<String>,
    pub suitable_for: Option<Vec<String>>,
    pub is_popular: Option<bool>,
    pub features: Option<Vec<String>>,
}

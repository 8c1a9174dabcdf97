pub mod app_config;
pub mod config;
pub mod permit;
pub mod skips;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use permit::{assess_permit, requires_permit, PermitAssessment, PERMIT_THRESHOLD_YARDS};
pub use skips::{is_popular_size, parse_size_yards, suitable_for_yards, NormalizedSkip};

use thiserror::Error;

/// Errors from loading configuration out of the environment.
///
/// Every variable has a default, so the only failure mode is a value that
/// refuses to parse.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Domain invariant violations on normalized skip data.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The size token has no leading integer yard count, or the count is zero.
    #[error("skip size {size:?} has no usable yard count")]
    UnparseableSize { size: String },

    /// The record's price is below zero.
    #[error("negative price {price} for skip {id}")]
    NegativePrice { id: i64, price: f64 },

    /// `originalPrice` is present but does not exceed `price`.
    #[error("original price {original_price} must exceed price {price} for skip {id}")]
    OriginalPriceNotGreater {
        id: i64,
        original_price: f64,
        price: f64,
    },
}

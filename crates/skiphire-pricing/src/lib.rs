pub mod client;
pub mod envelope;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::PricingClient;
pub use envelope::unwrap_envelope;
pub use error::PricingError;
pub use normalize::{normalize_all, normalize_listed, normalize_quote};
pub use types::{ListedSkip, SkipQuote};

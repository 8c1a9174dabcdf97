use thiserror::Error;

use skiphire_core::ValidationError;

/// Errors surfaced by the pricing client and ingestion pipeline.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("Failed to fetch skips: {status} {status_text}")]
    UpstreamStatus { status: u16, status_text: String },

    /// The base URL handed to the client could not be parsed.
    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response matched none of the accepted envelope shapes.
    #[error("unrecognized envelope: no record array in response body")]
    UnrecognizedEnvelope,

    /// A record matched neither accepted raw shape; the whole batch fails.
    #[error("record {index} matches no known skip shape: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A record broke a domain invariant after normalization.
    #[error("record {index} failed validation: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// The response body could not be parsed as JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PricingError {
    /// True for transport-level failures: no response, or a non-2xx status.
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            PricingError::Http(_) | PricingError::UpstreamStatus { .. }
        )
    }

    /// True when a response arrived but its shape was not recognized.
    #[must_use]
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            PricingError::UnrecognizedEnvelope
                | PricingError::MalformedRecord { .. }
                | PricingError::Deserialize { .. }
        )
    }

    /// True when a well-formed record broke a domain invariant.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, PricingError::InvalidRecord { .. })
    }

    /// Upstream HTTP status, for failures that carried one.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            PricingError::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

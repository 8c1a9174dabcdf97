//! HTTP client for the skip-pricing API.
//!
//! Wraps `reqwest` with the pipeline's error taxonomy: transport failures,
//! upstream status failures, and shape failures. [`PricingClient::fetch_skips`]
//! runs the full ingestion pipeline; [`PricingClient::fetch_raw`] stops after
//! the envelope unwrap so a proxy can forward records untouched.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use skiphire_core::NormalizedSkip;

use crate::envelope::unwrap_envelope;
use crate::error::PricingError;
use crate::normalize::normalize_all;

const DEFAULT_BASE_URL: &str = "https://app.wewantwaste.co.uk/";
const BY_LOCATION_PATH: &str = "api/skips/by-location";

/// Client for the skip-pricing API.
///
/// Manages the HTTP client and the by-location endpoint URL. Use
/// [`PricingClient::new`] for production or [`PricingClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Clone)]
pub struct PricingClient {
    client: Client,
    endpoint: Url,
}

impl PricingClient {
    /// Creates a new client pointed at the production pricing API.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, PricingError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock,
    /// or for a staging upstream).
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PricingError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PricingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalize: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint path rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(BY_LOCATION_PATH))
            .map_err(|e| PricingError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    /// Fetches the raw record array for a location.
    ///
    /// Issues the GET and unwraps whichever envelope the upstream answered
    /// with. Records come back untouched, in upstream order.
    ///
    /// # Errors
    ///
    /// - [`PricingError::Http`] on network failure.
    /// - [`PricingError::UpstreamStatus`] on a non-2xx response.
    /// - [`PricingError::Deserialize`] if the body is not valid JSON.
    /// - [`PricingError::UnrecognizedEnvelope`] if no record array is found.
    pub async fn fetch_raw(&self, postcode: &str, area: &str) -> Result<Vec<Value>, PricingError> {
        let url = self.build_url(postcode, area);
        let body = self.request_json(&url).await?;
        let records = unwrap_envelope(body)?;
        tracing::debug!(count = records.len(), %postcode, %area, "fetched raw skip records");
        Ok(records)
    }

    /// Fetches and normalizes all skips for a location.
    ///
    /// The full pipeline: transport, envelope unwrap, per-record shape
    /// classification, normalization, and invariant checks. All-or-nothing;
    /// a single bad record fails the batch.
    ///
    /// # Errors
    ///
    /// Everything [`PricingClient::fetch_raw`] returns, plus
    /// [`PricingError::MalformedRecord`] and [`PricingError::InvalidRecord`].
    pub async fn fetch_skips(
        &self,
        postcode: &str,
        area: &str,
    ) -> Result<Vec<NormalizedSkip>, PricingError> {
        let records = self.fetch_raw(postcode, area).await?;
        normalize_all(records)
    }

    /// Builds the by-location request URL with percent-encoded query
    /// parameters via [`Url::query_pairs_mut`].
    fn build_url(&self, postcode: &str, area: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("postcode", postcode);
            pairs.append_pair("area", area);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Http`] on network failure,
    /// [`PricingError::UpstreamStatus`] on a non-2xx status, and
    /// [`PricingError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<Value, PricingError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PricingError::UpstreamStatus {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PricingError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

//! Envelope unwrapping for upstream responses.
//!
//! The pricing API has answered with three envelope shapes over time: a bare
//! array, `{"skips": [...]}`, and `{"data": [...]}`. All three carry the
//! same records, so the rest of the pipeline never sees the difference.

use serde_json::Value;

use crate::error::PricingError;

/// Extracts the record array from any of the accepted envelopes.
///
/// Shapes are tried in order: the body itself as an array, then a `skips`
/// array field, then a `data` array field. A field holding a non-array does
/// not match; the next shape is tried.
///
/// # Errors
///
/// Returns [`PricingError::UnrecognizedEnvelope`] when no shape matches.
pub fn unwrap_envelope(body: Value) -> Result<Vec<Value>, PricingError> {
    match body {
        Value::Array(records) => Ok(records),
        Value::Object(mut fields) => {
            for key in ["skips", "data"] {
                if let Some(Value::Array(records)) = fields.remove(key) {
                    return Ok(records);
                }
            }
            Err(PricingError::UnrecognizedEnvelope)
        }
        _ => Err(PricingError::UnrecognizedEnvelope),
    }
}

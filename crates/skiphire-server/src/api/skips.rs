use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;
use serde_json::Value;

use skiphire_pricing::PricingError;

use crate::middleware::RequestId;

use super::AppState;

/// Flat error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// `GET /api/skips` forwards the configured by-location query upstream and
/// answers with the raw record array, untouched.
///
/// Upstream failure statuses are forwarded as-is; everything else that goes
/// wrong is a 500. Both shapes carry the flat [`ErrorBody`].
pub(super) async fn list_skips(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Response {
    match state.client.fetch_raw(&state.postcode, &state.area).await {
        Ok(records) => (StatusCode::OK, Json(Value::Array(records))).into_response(),
        Err(error) => {
            tracing::error!(request_id = %req_id.0, error = %error, "skip fetch failed");
            error_response(&error)
        }
    }
}

fn error_response(error: &PricingError) -> Response {
    let (status, message) = match error {
        PricingError::UpstreamStatus { status, .. } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            error.to_string(),
        ),
        PricingError::UnrecognizedEnvelope => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Invalid API response structure".to_string(),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch skip data".to_string(),
        ),
    };

    (status, Json(ErrorBody { error: message })).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::{build_app, AppState};
    use skiphire_pricing::PricingClient;

    fn state_for(base_url: &str) -> AppState {
        AppState {
            client: PricingClient::with_base_url(5, "skiphire-test/0.1", base_url)
                .expect("client should build from the mock server url"),
            postcode: "NR32".to_string(),
            area: "Lowestoft".to_string(),
        }
    }

    async fn get_skips(app: axum::Router) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::get("/api/skips")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should answer");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should collect");
        let body = serde_json::from_slice(&bytes).expect("body should be json");
        (status, body)
    }

    #[tokio::test]
    async fn success_forwards_the_raw_array() {
        let upstream = MockServer::start().await;
        let records = json!([
            {
                "id": 17_933,
                "size": 4,
                "hire_period_days": 14,
                "price_before_vat": 278.0,
                "vat": 20.0,
                "postcode": "NR32",
                "area": "",
                "forbidden": false,
                "allowed_on_road": true,
                "allows_heavy_waste": true
            }
        ]);
        Mock::given(method("GET"))
            .and(path("/api/skips/by-location"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "skips": records.clone() })),
            )
            .mount(&upstream)
            .await;

        let (status, body) = get_skips(build_app(state_for(&upstream.uri()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, records);
    }

    #[tokio::test]
    async fn records_are_not_validated_or_reshaped() {
        let upstream = MockServer::start().await;
        let records = json!([{ "unexpected": true }, 42, null]);
        Mock::given(method("GET"))
            .and(path("/api/skips/by-location"))
            .respond_with(ResponseTemplate::new(200).set_body_json(records.clone()))
            .mount(&upstream)
            .await;

        let (status, body) = get_skips(build_app(state_for(&upstream.uri()))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, records);
    }

    #[tokio::test]
    async fn upstream_failure_status_is_forwarded() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/skips/by-location"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&upstream)
            .await;

        let (status, body) = get_skips(build_app(state_for(&upstream.uri()))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body["error"],
            "Failed to fetch skips: 503 Service Unavailable"
        );
    }

    #[tokio::test]
    async fn unrecognized_envelope_is_an_internal_error() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/skips/by-location"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&upstream)
            .await;

        let (status, body) = get_skips(build_app(state_for(&upstream.uri()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Invalid API response structure");
    }

    #[tokio::test]
    async fn transport_failure_is_a_generic_internal_error() {
        // Nothing listens on this port, so the request itself fails.
        let (status, body) = get_skips(build_app(state_for("http://127.0.0.1:9"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch skip data");
    }
}

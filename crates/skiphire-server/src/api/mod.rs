mod skips;

use axum::{
    http::{header, HeaderName, Method},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use skiphire_pricing::PricingClient;

use crate::middleware::{request_id, RequestId};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub client: PricingClient,
    /// Postcode forwarded on every upstream by-location query.
    pub postcode: String,
    /// Area name forwarded on every upstream by-location query.
    pub area: String,
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    request_id: String,
    timestamp: DateTime<Utc>,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/skips", get(skips::list_skips))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(HealthBody {
        status: "ok",
        request_id: req_id.0,
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            client: PricingClient::with_base_url(5, "skiphire-test/0.1", "http://127.0.0.1:9")
                .expect("client should build from a literal base url"),
            postcode: "NR32".to_string(),
            area: "Lowestoft".to_string(),
        }
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = build_app(test_state());
        let response = app
            .oneshot(
                Request::get("/api/health")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should answer");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should collect");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body should be json");
        assert_eq!(body["status"], "ok");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn missing_request_id_gets_generated() {
        let app = build_app(test_state());
        let response = app
            .oneshot(
                Request::get("/api/health")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should answer");

        let header = response
            .headers()
            .get("x-request-id")
            .expect("response should carry a request id");
        assert!(!header.to_str().expect("header should be ascii").is_empty());
    }

    #[tokio::test]
    async fn inbound_request_id_is_echoed() {
        let app = build_app(test_state());
        let response = app
            .oneshot(
                Request::get("/api/health")
                    .header("x-request-id", "test-id-123")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should answer");

        assert_eq!(
            response
                .headers()
                .get("x-request-id")
                .expect("response should carry a request id"),
            "test-id-123"
        );
    }
}

use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Failure talking to the upstream trend API. The cause is logged at the
/// router boundary; clients only ever see a generic 500.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("upstream body was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::error!("error fetching upstream data: {self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to fetch data"})),
        )
            .into_response()
    }
}

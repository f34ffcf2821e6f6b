use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use http::{header, StatusCode};
use serde_json::{from_str, Value};
use tracing::{debug, info};

use crate::{
    models::{cache::CacheEntry, error::UpstreamError},
    utils::state::{AppState, UPSTREAM_REFERER, UPSTREAM_USER_AGENT},
};

/// `GET /api` — serve the cached upstream payload, refetching when the entry
/// is missing or older than the TTL.
pub async fn get_trend(State(state): State<Arc<AppState>>) -> Result<Response, UpstreamError> {
    let mut slot = state.cache.lock().await;

    if let Some(entry) = slot.as_ref() {
        if entry.is_fresh(state.ttl) {
            debug!("returning cached trend data");
            return Ok(trend_response(&entry.value));
        }
    }

    info!("fetching fresh trend data from upstream");
    let res = state
        .http_client
        .get(&state.upstream_url)
        .header(header::USER_AGENT, UPSTREAM_USER_AGENT)
        .header(header::REFERER, UPSTREAM_REFERER)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        // Leave the old entry in place: a failed refetch must not reset the
        // timer, so the next request retries immediately.
        return Err(UpstreamError::Status(status));
    }

    let body = res.text().await?;
    let value: Value = from_str(&body)?;
    let response = trend_response(&value);
    *slot = Some(CacheEntry::new(value));

    Ok(response)
}

fn trend_response(value: &Value) -> Response {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::CACHE_CONTROL, "public, max-age=300"),
        ],
        Json(value),
    )
        .into_response()
}

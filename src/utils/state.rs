use std::path::PathBuf;

use chrono::Duration;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::models::cache::CacheEntry;

/// Hero win-rate trend API.
pub const UPSTREAM_URL: &str = "https://herowinrate.moba.garena.tw/tw/api/server_trend";

// The upstream rejects requests that don't look like they came from its own
// frontend, so we send a browser User-Agent and Referer.
pub const UPSTREAM_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const UPSTREAM_REFERER: &str = "https://herowinrate.moba.garena.tw/";

/// Proxied payload is cached for 5 minutes.
pub const CACHE_TTL_SECS: i64 = 300;

/// Entry document, served at `/` and as the SPA fallback.
pub const INDEX_FILE: &str = "index.html";

pub struct AppState {
    pub http_client: Client,
    /// Single cache slot for the upstream payload. `None` until the first
    /// successful fetch; holding the lock across a refetch means at most one
    /// upstream call is in flight at a time.
    pub cache: Mutex<Option<CacheEntry<Value>>>,
    pub upstream_url: String,
    pub ttl: Duration,
    pub static_root: PathBuf,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            cache: Mutex::new(None),
            upstream_url: UPSTREAM_URL.to_string(),
            ttl: Duration::seconds(CACHE_TTL_SECS),
            static_root: PathBuf::from("."),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

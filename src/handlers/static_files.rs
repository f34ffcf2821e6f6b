use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use http::{header, StatusCode, Uri};
use tokio::fs;
use tracing::{debug, error};

use crate::utils::state::{AppState, INDEX_FILE};

/// Fallback handler for everything that isn't the API route: serve the file
/// the path points at, or the entry document for any path that doesn't
/// resolve to one (SPA fallback — this fires for missing assets too, not
/// only client-side routes).
pub async fn serve_static(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let path = uri.path();

    // Attempt the read directly; a missing file or a directory path errors
    // and drops through to the fallback.
    let file_path = resolve(&state.static_root, path);
    if let Ok(content) = fs::read(&file_path).await {
        debug!(path, "serving static file");
        let content_type = content_type_for(file_path.extension().and_then(|e| e.to_str()));
        return (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            content,
        )
            .into_response();
    }

    serve_index(&state).await
}

/// Map a request path to a file under the document root. `/` maps to the
/// entry document; `..` components are stripped so the result cannot escape
/// the root.
fn resolve(root: &Path, path: &str) -> PathBuf {
    let clean = path.replace("..", "");
    let relative = clean.trim_start_matches('/');

    if relative.is_empty() {
        root.join(INDEX_FILE)
    } else {
        root.join(relative)
    }
}

async fn serve_index(state: &AppState) -> Response {
    match fs::read(state.static_root.join(INDEX_FILE)).await {
        Ok(content) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            content,
        )
            .into_response(),
        Err(err) => {
            error!("entry document missing: {err}");
            (StatusCode::NOT_FOUND, "index.html not found").into_response()
        }
    }
}

/// Content-Type by file extension.
fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("txt") => "text/plain",
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

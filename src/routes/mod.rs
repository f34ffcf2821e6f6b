use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    handlers::{static_files::serve_static, trend::get_trend},
    utils::state::AppState,
};

pub fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target(env!("CARGO_PKG_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();
}

pub fn make_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api", get(get_trend))
        .fallback(serve_static)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

mod handlers;
mod models;
mod routes;
mod utils;
use std::sync::Arc;

use axum::serve;
use tokio::net::TcpListener;
use tracing::info;
use utils::state::AppState;

#[tokio::main]
async fn main() {
    routes::init_tracing();

    let state = Arc::new(AppState::new());
    let app = routes::make_app(state);

    // Bind to a TCP listener
    let listener = TcpListener::bind("0.0.0.0:3000").await;
    info!("Server running at http://localhost:3000");

    match listener {
        Ok(res) => serve(res, app).await.unwrap(),
        Err(err) => panic!("{}", err),
    }
}

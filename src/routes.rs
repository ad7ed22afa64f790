use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_check, translate_and_speak};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let static_dir = PathBuf::from(&state.config.system_config.static_dir);

    Router::new()
        .route("/api/translate-and-speak", post(translate_and_speak))
        .route("/api/health", get(health_check))
        // UI
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

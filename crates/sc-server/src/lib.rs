//! SugarCube save editor HTTP server (Axum).
//!
//! Provides endpoints to inspect an uploaded save, park an edited save under a
//! short-lived handle, and download it again, plus the static editor page and
//! a health check.

pub mod error;
pub mod headers;
pub mod pipeline;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use sc_core::config::{EditorConfig, ServerConfig};
use state::AppState;
use tower_http::trace::TraceLayer;

/// Build the application router from configuration.
pub fn app(config: &EditorConfig) -> Router {
    app_with_state(AppState::from_config(config), &config.server)
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState, server: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(routes::health_routes())
        .merge(routes::save_routes())
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .with_state(state)
        .merge(routes::static_routes(&server.static_dir));

    headers::with_security_headers(router).layer(TraceLayer::new_for_http())
}

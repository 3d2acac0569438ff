//! Main application router.

use crate::{
    controllers::{health_controller, people_controller},
    middleware::logging_middleware,
    state::AppState,
};
use axum::{extract::DefaultBodyLimit, middleware, Router};
use pessoas_config::ServerConfig;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::info;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let api_router = Router::new()
        .nest("/pessoas", people_controller::router())
        .layer(DefaultBodyLimit::max(server_config.max_body_size))
        .with_state(state);

    let router = Router::new()
        // Health endpoints
        .merge(health_controller::router())
        // API
        .merge(api_router)
        // Add middleware layers
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints");
    router
}

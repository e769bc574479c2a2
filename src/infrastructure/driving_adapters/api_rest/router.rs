//! Application Router
//!
//! Composes the contacts API with the mode-specific site routes and the
//! cross-cutting layers (request id, tracing, CORS).

use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::infrastructure::driven_adapters::config::{AppConfig, AppMode};
use crate::infrastructure::driving_adapters::api_rest::handlers::{contacts, site};
use crate::infrastructure::driving_adapters::api_rest::middleware::request_id_middleware;
use crate::infrastructure::driving_adapters::api_rest::AppState;

/// Build the full application router
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    let api = Router::new().nest(&config.server.contacts_path(), contacts::router());

    let site = match config.server.mode {
        AppMode::Development => site::development_router(),
        AppMode::Production => site::production_router(
            &config.frontend.static_dir,
            &config.frontend.index_file(),
        ),
    };

    // Router::layer wraps each layer around the previous ones, so the last
    // call is outermost: CORS -> tracing -> request id -> routes.
    api.merge(site)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

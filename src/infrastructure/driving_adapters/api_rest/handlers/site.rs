//! Site Handlers
//!
//! Everything outside the contacts API: the development status message, or,
//! in production, the health check plus the bundled front-end.

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

/// Plain-text body of the development root route
pub const DEVELOPMENT_MESSAGE: &str = "API is running in development mode.";

/// Routes served in development mode
pub fn development_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(development_status))
}

/// Routes served in production mode
///
/// Static assets come from `static_dir`; any other GET falls back to
/// `index_file` so client-side routing works.
pub fn production_router<S>(static_dir: &Path, index_file: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let assets = ServeDir::new(static_dir).fallback(ServeFile::new(index_file));

    Router::new()
        .route("/health", get(health))
        .fallback_service(assets)
}

async fn development_status() -> &'static str {
    DEVELOPMENT_MESSAGE
}

/// GET /health - Liveness check
async fn health() -> &'static str {
    "OK"
}

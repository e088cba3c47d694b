use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;

/// All application routes.
///
/// Anything that is not an API route is served from `dist_dir`; unknown
/// paths fall back to `index.html` so client-side routes survive a reload.
pub fn configure_routes(dist_dir: &Path) -> Router {
    let spa = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SCHEMA SERVICE
        // ========================================
        .route("/api/schemas", get(handlers::schemas::list_schemas))
        .route("/api/schemas/lint", get(handlers::schemas::lint_schemas))
        .route("/api/schemas/:slug", get(handlers::schemas::get_schema))
        .fallback_service(spa)
}

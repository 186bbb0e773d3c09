//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Trunk `dist/` directory. Any path that is not a file falls back
//! to `index.html` so client-side routes such as `/category/{id}` survive a
//! reload or a shared link.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Health probe plus the static bundle with a single-page-app fallback.
pub fn app(static_dir: &Path) -> Router {
    let index = ServeFile::new(static_dir.join("index.html"));
    let bundle = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(index);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(bundle)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

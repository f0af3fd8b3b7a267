//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Liveness probe
//! - `GET  /{code}`      - Short link redirect
//! - `/api/*`            - REST API (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{redirect_handler, root_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

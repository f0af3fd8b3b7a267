//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link with QR code
/// - `GET  /health`  - Storage health check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
}

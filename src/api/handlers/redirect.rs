//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Rebuild the full short URL from the configured base and `code`
/// 2. Look it up in the link registry (no cache)
/// 3. Return 302 Found with `Location` set to the original URL
///
/// # Errors
///
/// Returns 404 Not Found if no link matches.
/// Returns 500 Internal Server Error on storage errors, or if the stored URL
/// cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&code).await?;

    debug!(%code, target = %link.original_url, "Redirecting");

    let location = HeaderValue::try_from(link.original_url.as_str()).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link and its QR code for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "shortUrl": "https://s.example.com/aB3-_z",
///   "qrCodeUrl": "data:image/png;base64,iVBORw0KGgo..."
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `originalUrl` is missing or empty, or the body
/// is not JSON.
/// Returns 500 Internal Server Error if QR encoding or storage fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.link_service.shorten(payload.original_url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request to shorten a URL.
///
/// The URL is optional at the type level so that a body without it is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to shorten. Stored as given; only presence is checked.
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL is required")
    )]
    #[serde(default)]
    pub original_url: Option<String>,
}

/// Created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
    /// QR image of `short_url` as a PNG data URL.
    pub qr_code_url: String,
}

impl From<ShortLink> for ShortenResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            original_url: link.original_url,
            short_url: link.short_url,
            qr_code_url: link.qr_code_url,
        }
    }
}

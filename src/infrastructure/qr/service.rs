//! QR encoder trait and data URL helper.

use base64::Engine as _;

use crate::error::AppError;

/// Prefix of every stored QR payload.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Renders text into a scannable QR image.
///
/// Implementations are pure and CPU-bound. Callers in async context should
/// run them on the blocking pool.
///
/// # Implementations
///
/// - [`crate::infrastructure::qr::PngQrEncoder`] - PNG output
#[cfg_attr(test, mockall::automock)]
pub trait QrEncoder: Send + Sync {
    /// Encodes `text` and returns the PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the text does not fit in a QR code
    /// or the image cannot be encoded.
    fn encode(&self, text: &str) -> Result<Vec<u8>, AppError>;
}

/// Wraps PNG bytes in a base64 `data:` URL.
pub fn to_data_url(png: &[u8]) -> String {
    let mut url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + png.len().div_ceil(3) * 4);
    url.push_str(PNG_DATA_URL_PREFIX);
    base64::engine::general_purpose::STANDARD.encode_string(png, &mut url);
    url
}

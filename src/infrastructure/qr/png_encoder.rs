//! PNG QR encoder.

use image::{ExtendedColorType, ImageEncoder, Luma, codecs::png::PngEncoder};
use qrcode::QrCode;
use serde_json::json;

use super::service::QrEncoder;
use crate::error::AppError;

/// Default size of one QR module in pixels.
pub const DEFAULT_MODULE_SIZE: u32 = 8;

/// Renders QR codes as grayscale PNG images.
#[derive(Debug, Clone, Copy)]
pub struct PngQrEncoder {
    module_size: u32,
}

impl PngQrEncoder {
    /// Creates an encoder drawing each module as a `module_size` square.
    pub fn new(module_size: u32) -> Self {
        Self { module_size }
    }
}

impl Default for PngQrEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE_SIZE)
    }
}

impl QrEncoder for PngQrEncoder {
    fn encode(&self, text: &str) -> Result<Vec<u8>, AppError> {
        let code = QrCode::new(text.as_bytes()).map_err(|e| {
            AppError::internal("Failed to create QR code", json!({ "reason": e.to_string() }))
        })?;

        let image = code
            .render::<Luma<u8>>()
            .module_dimensions(self.module_size, self.module_size)
            .build();

        let mut png_bytes: Vec<u8> = Vec::new();
        PngEncoder::new(&mut png_bytes)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::L8,
            )
            .map_err(|e| {
                AppError::internal(
                    "Failed to encode QR code PNG",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        Ok(png_bytes)
    }
}

//! QR code rendering for short links.
//!
//! Provides a [`QrEncoder`] trait with one production implementation:
//! - [`PngQrEncoder`] - Renders a PNG image with the `qrcode` and `image` crates
//!
//! [`to_data_url`] wraps encoded bytes in the `data:` URL form stored on each
//! short link.

mod png_encoder;
mod service;

pub use png_encoder::PngQrEncoder;
pub use service::{PNG_DATA_URL_PREFIX, QrEncoder, to_data_url};

#[cfg(test)]
pub use service::MockQrEncoder;

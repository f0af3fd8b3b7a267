//! Core domain entities.
//!
//! - [`ShortLink`] - A persisted short URL mapping with its QR code
//! - [`NewShortLink`] - Input for creating a [`ShortLink`]

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};

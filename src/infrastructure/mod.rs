//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory link repositories
//! - [`qr`] - QR code rendering

pub mod persistence;
pub mod qr;

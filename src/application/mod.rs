//! Application layer services implementing business logic.
//!
//! Services consume repository and encoder traits and provide a narrow API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;

//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link registry.
///
/// Records are keyed by their full short URL. The registry is the only
/// shared mutable resource of the service and is expected to provide its own
/// concurrency safety: single-record atomic writes and isolated reads.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new short link.
    ///
    /// The short URL is not checked for existence beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record with the same short URL
    /// already exists.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its full short URL (exact match only).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<ShortLink>, AppError>;

    /// Checks that the underlying storage is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage does not answer.
    async fn health_check(&self) -> Result<(), AppError>;
}

//! Link repository implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryLinkRepository`] - Process-local storage for tests and
//!   database-less runs

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;

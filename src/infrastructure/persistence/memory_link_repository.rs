//! In-memory implementation of the link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link registry held in process memory.
///
/// Backed by a `DashMap` keyed by short URL, so concurrent reads and writes
/// to different shards do not block each other. Data is lost on restart;
/// used for tests and for running without a database.
#[derive(Debug)]
pub struct InMemoryLinkRepository {
    storage: DashMap<String, ShortLink>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        // Same semantics as the unique index in PostgreSQL.
        match self.storage.entry(new_link.short_url.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "short_links_short_url_key" }),
            )),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let link = new_link.into_short_link(id, Utc::now());
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.storage.get(short_url).map(|entry| entry.value().clone()))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_link(original_url: &str, short_url: &str) -> NewShortLink {
        NewShortLink {
            original_url: original_url.to_string(),
            short_url: short_url.to_string(),
            qr_code_url: "data:image/png;base64,AAAA".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryLinkRepository::new();

        let created = repo
            .create(new_link("https://example.com", "http://s.test/abc123"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let found = repo
            .find_by_short_url("http://s.test/abc123")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_not_found() {
        let repo = InMemoryLinkRepository::new();
        assert!(
            repo.find_by_short_url("http://s.test/nope00")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_find_is_exact_match() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("https://example.com", "http://s.test/abc123"))
            .await
            .unwrap();

        for probe in ["http://s.test/abc12", "http://s.test/ABC123", "abc123"] {
            assert!(repo.find_by_short_url(probe).await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn test_duplicate_short_url_keeps_first_record() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("https://first.com", "http://s.test/dup000"))
            .await
            .unwrap();

        let err = repo
            .create(new_link("https://second.com", "http://s.test/dup000"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));

        let found = repo
            .find_by_short_url("http://s.test/dup000")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.original_url, "https://first.com");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let repo = Arc::new(InMemoryLinkRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(new_link(
                        &format!("https://example.com/{i}"),
                        &format!("http://s.test/code{i:02}"),
                    ))
                    .await
                    .unwrap()
                    .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 50);
        assert_eq!(repo.len(), 50);
    }
}

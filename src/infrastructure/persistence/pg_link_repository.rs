//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use tracing::instrument;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for short link storage and retrieval.
///
/// Lookups hit the unique index `short_links_short_url_key`.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ShortLinkRow {
    id: i64,
    original_url: String,
    short_url: String,
    qr_code_url: String,
    created_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(r: ShortLinkRow) -> Self {
        ShortLink::new(r.id, r.original_url, r.short_url, r.qr_code_url, r.created_at)
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    #[instrument(skip(self, new_link), fields(short_url = %new_link.short_url))]
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (original_url, short_url, qr_code_url)
            VALUES ($1, $2, $3)
            RETURNING id, original_url, short_url, qr_code_url, created_at
            "#,
        )
        .bind(new_link.original_url)
        .bind(new_link.short_url)
        .bind(new_link.qr_code_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, original_url, short_url, qr_code_url, created_at
            FROM short_links
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}

//! Short link entity mapping a short URL to its original target.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// Records are write-once: there is no update or delete path. The
/// `short_url` is the full link (`base_url/code`) and acts as the lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    /// QR image of `short_url` as a `data:image/png;base64,...` URL.
    pub qr_code_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_url: String,
        qr_code_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_url,
            qr_code_url,
            created_at,
        }
    }

    /// Returns the code segment of the short URL.
    pub fn code(&self) -> &str {
        self.short_url
            .rsplit_once('/')
            .map_or(self.short_url.as_str(), |(_, code)| code)
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub original_url: String,
    pub short_url: String,
    pub qr_code_url: String,
}

impl NewShortLink {
    /// Completes the record with storage-assigned fields.
    pub fn into_short_link(self, id: i64, created_at: DateTime<Utc>) -> ShortLink {
        ShortLink::new(
            id,
            self.original_url,
            self.short_url,
            self.qr_code_url,
            created_at,
        )
    }
}

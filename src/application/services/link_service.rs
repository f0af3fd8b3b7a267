//! Link creation and resolution service.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::qr::{QrEncoder, to_data_url};
use crate::utils::code_generator::CodeGenerator;

/// Service for creating and resolving short links.
///
/// Owns the base URL, so short links are built by the same function at
/// creation and at resolution time.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    qr_encoder: Arc<dyn QrEncoder>,
    code_generator: Arc<dyn CodeGenerator>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// Trailing slashes on `base_url` are dropped.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        qr_encoder: Arc<dyn QrEncoder>,
        code_generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            link_repository,
            qr_encoder,
            code_generator,
            base_url,
        }
    }

    /// Constructs the full short URL for a code.
    pub fn get_short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Creates a short link for `original_url`.
    ///
    /// # Pipeline
    ///
    /// 1. Reject a missing or empty URL before any other work
    /// 2. Generate a code and build the short URL
    /// 3. Render the QR code on the blocking pool
    /// 4. Persist the record (last, so a failure leaves nothing behind)
    ///
    /// The URL is stored as given, without format validation. The generated
    /// code is not checked for collisions before the insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is missing or empty.
    ///
    /// Returns [`AppError::Internal`] if code generation, QR encoding or the
    /// write fails, including when the generated short URL is already taken.
    #[instrument(skip(self))]
    pub async fn shorten(&self, original_url: Option<String>) -> Result<ShortLink, AppError> {
        let original_url = original_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::bad_request("URL is required", Value::Null))?;

        let code = self.code_generator.generate()?;
        let short_url = self.get_short_url(&code);

        let qr_code_url = self.render_qr(short_url.clone()).await?;

        let new_link = NewShortLink {
            original_url,
            short_url,
            qr_code_url,
        };

        let link = self
            .link_repository
            .create(new_link)
            .await
            .map_err(|err| match err {
                AppError::Conflict { .. } => {
                    warn!(%code, "Generated short code collided with an existing link");
                    AppError::internal("Short code collision", json!({ "code": code }))
                }
                other => other,
            })?;

        info!(code = %link.code(), short_url = %link.short_url, "Short link created");
        Ok(link)
    }

    /// Resolves a code taken from a request path to its short link.
    ///
    /// Every call is a fresh registry lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Internal`] on storage errors.
    #[instrument(skip(self))]
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        let short_url = self.get_short_url(code);

        self.link_repository
            .find_by_short_url(&short_url)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "code": code })))
    }

    /// Checks that the link registry is reachable.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.link_repository.health_check().await
    }

    async fn render_qr(&self, short_url: String) -> Result<String, AppError> {
        let encoder = Arc::clone(&self.qr_encoder);

        let png = tokio::task::spawn_blocking(move || encoder.encode(&short_url))
            .await
            .map_err(|e| {
                AppError::internal("QR encoding task failed", json!({ "reason": e.to_string() }))
            })??;

        Ok(to_data_url(&png))
    }
}

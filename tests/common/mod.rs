#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use qrlink::api::handlers::{health_handler, redirect_handler, root_handler, shorten_handler};
use qrlink::application::services::LinkService;
use qrlink::domain::entities::{NewShortLink, ShortLink};
use qrlink::domain::repositories::LinkRepository;
use qrlink::error::AppError;
use qrlink::infrastructure::persistence::InMemoryLinkRepository;
use qrlink::infrastructure::qr::QrEncoder;
use qrlink::state::AppState;
use qrlink::utils::code_generator::{ALPHABET, CODE_LENGTH, CodeGenerator, RandomCodeGenerator};

pub const BASE_URL: &str = "http://localhost:5000";

/// PNG signature, enough to make a non-empty data URL.
pub const FAKE_PNG: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// True if `code` has the length and alphabet of a generated code.
pub fn is_generated_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}

pub struct StubQrEncoder;

impl QrEncoder for StubQrEncoder {
    fn encode(&self, _text: &str) -> Result<Vec<u8>, AppError> {
        Ok(FAKE_PNG.to_vec())
    }
}

pub struct FailingQrEncoder;

impl QrEncoder for FailingQrEncoder {
    fn encode(&self, _text: &str) -> Result<Vec<u8>, AppError> {
        Err(AppError::internal(
            "Failed to create QR code",
            json!({ "reason": "data too long" }),
        ))
    }
}

/// Registry whose every call fails like an unreachable database.
pub struct FailingLinkRepository;

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn create(&self, _new_link: NewShortLink) -> Result<ShortLink, AppError> {
        Err(AppError::internal(
            "Database error",
            json!({ "reason": "connection refused" }),
        ))
    }

    async fn find_by_short_url(&self, _short_url: &str) -> Result<Option<ShortLink>, AppError> {
        Err(AppError::internal(
            "Database error",
            json!({ "reason": "connection refused" }),
        ))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(AppError::internal(
            "Database error",
            json!({ "reason": "connection refused" }),
        ))
    }
}

/// Generator that always returns the same code.
pub struct FixedCodeGenerator(pub &'static str);

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> Result<String, AppError> {
        Ok(self.0.to_string())
    }
}

/// Random generator that counts how often it was asked for a code.
#[derive(Default)]
pub struct CountingCodeGenerator {
    pub calls: AtomicUsize,
}

impl CountingCodeGenerator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CodeGenerator for CountingCodeGenerator {
    fn generate(&self) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        RandomCodeGenerator.generate()
    }
}

pub fn create_state(
    repository: Arc<dyn LinkRepository>,
    encoder: Arc<dyn QrEncoder>,
    generator: Arc<dyn CodeGenerator>,
) -> AppState {
    AppState::new(Arc::new(LinkService::new(
        repository, encoder, generator, BASE_URL,
    )))
}

/// State over an in-memory registry, returned alongside for inspection.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let state = create_state(
        repository.clone(),
        Arc::new(StubQrEncoder),
        Arc::new(RandomCodeGenerator),
    );
    (state, repository)
}

pub fn create_test_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/{code}", get(redirect_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/api/health", get(health_handler))
        .with_state(state)
}

pub async fn insert_link(repository: &dyn LinkRepository, code: &str, original_url: &str) {
    repository
        .create(NewShortLink {
            original_url: original_url.to_string(),
            short_url: format!("{BASE_URL}/{code}"),
            qr_code_url: "data:image/png;base64,AAAA".to_string(),
        })
        .await
        .unwrap();
}

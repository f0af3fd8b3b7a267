use std::sync::Arc;

use crate::application::services::LinkService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}

//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortUrlService;

#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<ShortUrlService>,
}

impl AppState {
    pub fn new(short_url_service: Arc<ShortUrlService>) -> Self {
        Self { short_url_service }
    }
}

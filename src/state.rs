//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::RegistryService;
use crate::infrastructure::persistence::MemoryRecordRepository;

/// Shared state for all HTTP handlers.
///
/// Cloned per request by axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RegistryService<MemoryRecordRepository>>,
    base_url: String,
}

impl AppState {
    /// Creates application state from its components.
    ///
    /// Any trailing slash on the base URL is trimmed once here so short
    /// links never carry a double slash.
    pub fn new(
        registry: Arc<RegistryService<MemoryRecordRepository>>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Constructs the full short link for a code.
    pub fn short_link(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

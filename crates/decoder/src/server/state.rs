//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::config::Config;
use crate::presentation::DEFAULT_VIEWER_BASE_URL;

/// Application state shared across all request handlers.
///
/// The decoder itself is a pure function, so the state carries only
/// presentation and transport settings. All fields are cheaply cloneable so
/// that Axum can clone the state for each request.
#[derive(Clone)]
pub struct AppState {
    /// Base URL of the external AST viewer used to build `viewerUrl`.
    pub viewer_base_url: Arc<String>,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl AppState {
    /// Create a new [`AppState`] from the loaded configuration.
    pub fn new(cfg: &Config) -> Self {
        Self {
            viewer_base_url: Arc::new(cfg.viewer_base_url.clone()),
            max_body_bytes: cfg.max_body_bytes,
        }
    }
}

impl Default for AppState {
    /// Creates a default [`AppState`] with stock settings, suitable for tests.
    fn default() -> Self {
        Self {
            viewer_base_url: Arc::new(DEFAULT_VIEWER_BASE_URL.into()),
            max_body_bytes: crate::config::MIN_BODY_BYTES,
        }
    }
}

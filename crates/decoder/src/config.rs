//! Configuration loading and validation for the decoder service.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any variable is present but invalid.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::presentation::DEFAULT_VIEWER_BASE_URL;

/// Minimum request body capacity the service must accept, to admit large
/// base64-encoded ciphertexts.
pub const MIN_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Validated decoder service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the HTTP server listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Base URL of the external AST viewer used to build `viewerUrl`.
    #[serde(default = "default_viewer_base_url")]
    pub viewer_base_url: String,

    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_port() -> u16 {
    8080
}
fn default_viewer_base_url() -> String {
    DEFAULT_VIEWER_BASE_URL.into()
}
fn default_max_body_bytes() -> usize {
    MIN_BODY_BYTES
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.viewer_base_url.trim().is_empty() {
            anyhow::bail!("VIEWER_BASE_URL must not be empty");
        }
        if self.viewer_base_url.ends_with('/') {
            anyhow::bail!("VIEWER_BASE_URL must not end with a trailing slash");
        }
        if self.max_body_bytes < MIN_BODY_BYTES {
            anyhow::bail!("MAX_BODY_BYTES must be at least {MIN_BODY_BYTES} (10 MiB)");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_port: default_listen_port(),
            viewer_base_url: default_viewer_base_url(),
            max_body_bytes: default_max_body_bytes(),
            log_level: default_log_level(),
        }
    }
}

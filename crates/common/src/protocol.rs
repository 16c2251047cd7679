//! Request and response types exchanged over the public HTTP API.
//!
//! Wire field names are camelCase to stay compatible with the original
//! `decrypt-ast` API consumers.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Decrypt endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /api/decrypt-ast`.
///
/// Every field is optional at the serde level so that the handler can run the
/// missing-parameter check itself and answer with the canonical 400 body
/// before any hex/base64 decoding is attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptRequest {
    /// Hex-encoded AES-256 key (64 hex characters, 32 bytes decoded).
    pub key_hex: Option<String>,
    /// Hex-encoded CBC initialization vector (32 hex characters, 16 bytes decoded).
    pub iv_hex: Option<String>,
    /// Base64-encoded ciphertext; decoded length must be a non-zero multiple of 16.
    pub ciphertext_b64: Option<String>,
}

/// Successful response body for `POST /api/decrypt-ast`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The recovered plaintext — the serialized AST string.
    pub decrypted_ast: String,
    /// Fixed illustrative snippet. Not derived from the input; see
    /// the presentation module for why this is a constant.
    pub reconstructed_code: String,
    /// ts-ast-viewer.com link with the plaintext percent-encoded into the fragment.
    pub viewer_url: String,
    /// Fixed confirmation string.
    pub message: String,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Top-level error string (e.g. `"Decrypt gagal"`).
    pub error: String,
    /// Machine-usable detail text distinguishing the failure kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] with no detail text.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// Construct an [`ErrorResponse`] with detail text.
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
///
/// The decoder holds no warm-up state (no keys to fetch, no caches to fill),
/// so the status is `"ok"` whenever the process is serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: String,
}

//! Axum request handlers for all service endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{DecryptRequest, DecryptResponse, ErrorResponse, HealthResponse};
use common::ServiceError;
use tracing::warn;

use super::state::AppState;
use crate::crypto;
use crate::presentation::{self, RECONSTRUCTED_CODE, SUCCESS_MESSAGE};

/// `POST /api/decrypt-ast` — decrypt an AES-256-CBC ciphertext.
///
/// The missing-parameter check runs before any hex/base64 decoding so that
/// incomplete requests never reach the cryptographic primitive. Every decode
/// failure is answered with the canonical `"Decrypt gagal"` body plus a
/// detail string distinguishing the failure kind.
pub async fn decrypt_ast(
    State(state): State<AppState>,
    Json(req): Json<DecryptRequest>,
) -> Response {
    let (Some(key_hex), Some(iv_hex), Some(ciphertext_b64)) =
        (req.key_hex, req.iv_hex, req.ciphertext_b64)
    else {
        return error_response(ServiceError::MissingParameter(
            "keyHex, ivHex, ciphertextB64".into(),
        ));
    };

    match crypto::decode(&key_hex, &iv_hex, &ciphertext_b64) {
        Ok(plaintext) => {
            let viewer_url = presentation::viewer_url(&state.viewer_base_url, &plaintext);
            let body = DecryptResponse {
                success: true,
                decrypted_ast: plaintext,
                reconstructed_code: RECONSTRUCTED_CODE.into(),
                viewer_url,
                message: SUCCESS_MESSAGE.into(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "decode failed");
            error_response(ServiceError::DecryptFailure(e.to_string()))
        }
    }
}

/// Fallback for non-POST methods on the decrypt route.
pub async fn method_not_allowed() -> Response {
    error_response(ServiceError::MethodNotAllowed)
}

/// `GET /health` — liveness check.
///
/// The decoder holds no warm-up state, so a serving process is always ready.
pub async fn health() -> impl IntoResponse {
    let body = HealthResponse {
        status: "ok".into(),
    };
    (StatusCode::OK, Json(body))
}

/// Catch-all 404 handler.
pub async fn not_found() -> Response {
    error_response(ServiceError::NotFound)
}

/// Map a [`ServiceError`] to its HTTP status and canonical JSON body.
fn error_response(err: ServiceError) -> Response {
    let status = StatusCode::from_u16(err.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match err {
        ServiceError::MissingParameter(fields) => {
            ErrorResponse::new(format!("Missing parameters. Butuh: {fields}"))
        }
        ServiceError::MethodNotAllowed => ErrorResponse::new("Method not allowed. Gunakan POST."),
        ServiceError::NotFound => ErrorResponse::new("Not found"),
        ServiceError::DecryptFailure(details) => {
            ErrorResponse::with_details("Decrypt gagal", details)
        }
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;

    fn request(key: Option<&str>, iv: Option<&str>, ct: Option<&str>) -> DecryptRequest {
        DecryptRequest {
            key_hex: key.map(Into::into),
            iv_hex: iv.map(Into::into),
            ciphertext_b64: ct.map(Into::into),
        }
    }

    #[tokio::test]
    async fn missing_key_yields_400() {
        let resp = decrypt_ast(
            State(AppState::default()),
            Json(request(None, Some("00"), Some("AA=="))),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_iv_yields_400() {
        let resp = decrypt_ast(
            State(AppState::default()),
            Json(request(Some("00"), None, Some("AA=="))),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_ciphertext_yields_400() {
        let resp = decrypt_ast(
            State(AppState::default()),
            Json(request(Some("00"), Some("00"), None)),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn undecryptable_input_yields_500() {
        // Well-formed fields, but the key is the wrong length.
        let resp = decrypt_ast(
            State(AppState::default()),
            Json(request(Some("00"), Some("00"), Some("AA=="))),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let resp = health().await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn method_not_allowed_is_405() {
        let resp = method_not_allowed().await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

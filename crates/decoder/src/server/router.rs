//! Axum router construction.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::{handlers, middleware, state::AppState};

/// Build the application [`Router`] with all routes and middleware attached.
///
/// The decrypt route answers non-POST methods itself so that the 405 body is
/// the canonical JSON error rather than Axum's empty default.
pub fn build(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);
    Router::new()
        .route(
            "/api/decrypt-ast",
            post(handlers::decrypt_ast).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(middleware::REQUEST_TIMEOUT))
        .layer(CompressionLayer::new())
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = build(AppState::default());
        let req = Request::builder()
            .uri("/unknown")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn health_route_returns_200() {
        let app = build(AppState::default());
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[tokio::test]
    async fn get_on_decrypt_route_returns_405_json() {
        let app = build(AppState::default());
        let req = Request::builder()
            .uri("/api/decrypt-ast")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 405);

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Method not allowed. Gunakan POST.");
    }

    #[tokio::test]
    async fn decrypt_end_to_end() {
        use aes::Aes256;
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        use axum_test::TestServer;
        use cbc::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};

        type Aes256CbcEnc = cbc::Encryptor<Aes256>;
        let key = [0u8; 32];
        let iv = [0u8; 16];
        let ciphertext = Aes256CbcEnc::new((&key).into(), (&iv).into())
            .encrypt_padded_vec_mut::<Pkcs7>(b"hello");

        let server = TestServer::new(build(AppState::default())).unwrap();
        let resp = server
            .post("/api/decrypt-ast")
            .json(&serde_json::json!({
                "keyHex": "0".repeat(64),
                "ivHex": "0".repeat(32),
                "ciphertextB64": STANDARD.encode(ciphertext),
            }))
            .await;
        resp.assert_status_ok();

        let body: serde_json::Value = resp.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["decryptedAst"], "hello");
        assert_eq!(body["viewerUrl"], "https://ts-ast-viewer.com/#code/hello");
        assert!(body["reconstructedCode"].as_str().unwrap().contains("handleMessage"));
        assert!(body["message"].as_str().unwrap().starts_with("Decrypt sukses!"));
    }

    #[tokio::test]
    async fn empty_ciphertext_returns_decrypt_gagal() {
        use axum_test::TestServer;

        let server = TestServer::new(build(AppState::default())).unwrap();
        let resp = server
            .post("/api/decrypt-ast")
            .json(&serde_json::json!({
                "keyHex": "0".repeat(64),
                "ivHex": "0".repeat(32),
                "ciphertextB64": "",
            }))
            .await;
        resp.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = resp.json();
        assert_eq!(body["error"], "Decrypt gagal");
        assert!(body["details"].as_str().unwrap().contains("empty"));
    }

    #[tokio::test]
    async fn post_with_missing_fields_returns_400_json() {
        let app = build(AppState::default());
        let req = Request::builder()
            .method("POST")
            .uri("/api/decrypt-ast")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"keyHex": "00"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 400);

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["error"],
            "Missing parameters. Butuh: keyHex, ivHex, ciphertextB64"
        );
    }
}

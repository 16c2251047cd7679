//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::MissingParameter`] → 400
/// - [`ServiceError::MethodNotAllowed`] → 405
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::DecryptFailure`] → 500
#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more required request fields are absent.
    #[error("missing parameters: {0}")]
    MissingParameter(String),

    /// The route exists but was called with the wrong HTTP method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// The requested route does not exist.
    #[error("not found")]
    NotFound,

    /// Decoding, decryption, or padding validation failed.
    #[error("decrypt failure: {0}")]
    DecryptFailure(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::MissingParameter(_) => 400,
            ServiceError::MethodNotAllowed => 405,
            ServiceError::NotFound => 404,
            ServiceError::DecryptFailure(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_codes() {
        assert_eq!(
            ServiceError::MissingParameter("keyHex".into()).http_status(),
            400
        );
        assert_eq!(ServiceError::MethodNotAllowed.http_status(), 405);
        assert_eq!(ServiceError::NotFound.http_status(), 404);
        assert_eq!(ServiceError::DecryptFailure("x".into()).http_status(), 500);
    }

    #[test]
    fn display_includes_message() {
        let e = ServiceError::DecryptFailure("invalid padding".into());
        assert!(e.to_string().contains("invalid padding"));
    }
}

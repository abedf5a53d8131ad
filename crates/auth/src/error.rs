//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error.
///
/// Every kind surfaces to the HTTP boundary as 401: the verifier has no
/// side channel to tell a caller "issuer unreachable" apart from "forged
/// token" without weakening the boundary. The kinds stay distinct so
/// logs and callers inside the process can tell them apart.
#[derive(Debug)]
pub enum AuthError {
    /// No `Authorization` header on the request
    MissingAuthorization,
    /// Header present but not a `Bearer <token>` value
    InvalidAuthorizationFormat,
    /// The issuer's JWKS endpoint was unreachable or returned malformed data
    KeySetUnavailable(String),
    /// Token references a `kid` absent from the current key set
    UnknownKey,
    /// Signature, algorithm, audience, or expiration check failed
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // Key-set outages must be distinguishable from forgery attempts
        // in logs even though both answer 401.
        match &self {
            AuthError::KeySetUnavailable(detail) => {
                tracing::warn!(error = %detail, "JWKS endpoint unavailable during verification");
            }
            AuthError::InvalidToken(detail) => {
                tracing::debug!(error = %detail, "Token verification failed");
            }
            _ => {}
        }

        let (code, message) = match self {
            AuthError::MissingAuthorization => {
                ("MISSING_AUTHORIZATION", "Authorization header required")
            }
            AuthError::InvalidAuthorizationFormat => {
                ("INVALID_AUTHORIZATION", "Missing or malformed token")
            }
            AuthError::KeySetUnavailable(_) => {
                ("KEY_SET_UNAVAILABLE", "Could not validate credentials")
            }
            AuthError::UnknownKey => ("UNKNOWN_KEY", "Public key not found"),
            AuthError::InvalidToken(_) => ("INVALID_TOKEN", "Invalid or expired token"),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

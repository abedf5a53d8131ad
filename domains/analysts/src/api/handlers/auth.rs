//! Auth introspection handlers

use axum::Json;
use crewdesk_auth::{AuthUser, Claims};

/// Return the verified claim set for the presented token
///
/// **GET /api/auth/whoami**
pub async fn whoami(AuthUser(claims): AuthUser) -> Json<Claims> {
    Json(claims)
}

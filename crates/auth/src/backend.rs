//! Concrete authentication backend
//!
//! Wraps the shared `TokenVerifier` so domain states can hand it to the
//! extractors via `FromRef`. Cloning is cheap; the verifier itself is
//! shared immutably across requests.

use std::sync::Arc;

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::verifier::TokenVerifier;

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    verifier: Arc<TokenVerifier>,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            verifier: Arc::new(TokenVerifier::new(config)),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        self.verifier.config()
    }

    /// Verify a bearer token and return its claim set.
    pub async fn authenticate(&self, token: &str) -> Result<Claims, AuthError> {
        self.verifier.verify(token).await
    }
}

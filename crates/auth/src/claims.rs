//! Verified token claims

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Decoded claim set of a verified token.
///
/// Well-known claims are typed; everything else the identity provider
/// puts in the payload lands in `extra` so new claims never break
/// deserialization. Immutable once produced, scoped to a single request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID at the identity provider)
    pub sub: String,
    /// Expiration time (seconds since epoch)
    pub exp: u64,
    /// Issued at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Any remaining claims (audience, issuer, provider-specific fields)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Look up a non-typed claim by name.
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.extra.get(name)
    }
}

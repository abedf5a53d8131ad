//! Token verification pipeline
//!
//! Given a bearer token, resolves the signing key from the issuer's
//! JWKS and cryptographically validates signature, audience, and
//! expiration. Purely a function of the token plus the current remote
//! key set; the only suspension point is the outbound fetch.

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

use crate::claims::Claims;
use crate::config::{is_symmetric, AuthConfig};
use crate::error::AuthError;
use crate::jwks::{Jwk, KeySetClient};

/// Verifies bearer tokens against the issuer's published signing keys.
pub struct TokenVerifier {
    keys: KeySetClient,
    config: AuthConfig,
}

impl TokenVerifier {
    pub fn new(config: AuthConfig) -> Self {
        let keys = KeySetClient::new(
            config.jwks_url.clone(),
            config.fetch_timeout,
            config.cache_policy.clone(),
        );
        Self { keys, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Verify a compact JWT and return its decoded claim set.
    ///
    /// A claim set is only ever produced from a token whose signature
    /// validates against a key matching the token's declared `kid`,
    /// whose algorithm is on the asymmetric allow-list, and whose
    /// audience and expiration checks pass.
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        // Structural parse of the unverified header segment; no trust
        // is placed in it beyond routing the key lookup.
        let header = decode_header(token)
            .map_err(|e| AuthError::InvalidToken(format!("malformed token header: {e}")))?;

        // Symmetric algorithms are rejected before any key material is
        // consulted: accepting them with a key fetched as "public"
        // enables a downgrade/key-confusion forgery.
        if is_symmetric(header.alg) {
            return Err(AuthError::InvalidToken(format!(
                "symmetric algorithm {:?} is not accepted",
                header.alg
            )));
        }
        if !self.config.allowed_algorithms.contains(&header.alg) {
            return Err(AuthError::InvalidToken(format!(
                "algorithm {:?} is not on the allow-list",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| AuthError::InvalidToken("token header missing kid".to_string()))?;

        let jwk = self.resolve_key(&kid).await?;
        let decoding_key = Self::decoding_key(&jwk)?;

        let primary = self
            .config
            .allowed_algorithms
            .first()
            .copied()
            .unwrap_or(Algorithm::RS256);
        let mut validation = Validation::new(primary);
        validation.algorithms = self.config.allowed_algorithms.clone();
        validation.set_audience(&[&self.config.audience]);
        validation.validate_exp = true;
        // jsonwebtoken defaults to 60s of clock-skew leeway; expiration
        // here is strict.
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(describe_validation_error(&e)))?;

        Ok(token_data.claims)
    }

    /// Look up the signing key for `kid`, forcing one refresh on a miss
    /// when a cache is configured (key-rotation race).
    async fn resolve_key(&self, kid: &str) -> Result<Jwk, AuthError> {
        let key_set = self.keys.current().await?;
        if let Some(jwk) = key_set.find(kid) {
            return Ok(jwk.clone());
        }

        if self.keys.is_caching() {
            let refreshed = self.keys.refresh().await?;
            if let Some(jwk) = refreshed.find(kid) {
                return Ok(jwk.clone());
            }
        }

        Err(AuthError::UnknownKey)
    }

    /// Reconstruct the verification key from the minimal public fields.
    fn decoding_key(jwk: &Jwk) -> Result<DecodingKey, AuthError> {
        if jwk.kty != "RSA" {
            return Err(AuthError::InvalidToken(format!(
                "unsupported key type {:?}",
                jwk.kty
            )));
        }

        DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
            .map_err(|e| AuthError::InvalidToken(format!("invalid public key material: {e}")))
    }
}

/// Short diagnostic text for a validation failure. Never includes key
/// material or claim values.
fn describe_validation_error(e: &jsonwebtoken::errors::Error) -> String {
    use jsonwebtoken::errors::ErrorKind;

    match e.kind() {
        ErrorKind::InvalidSignature => "signature verification failed".to_string(),
        ErrorKind::ExpiredSignature => "token has expired".to_string(),
        ErrorKind::InvalidAudience => "audience mismatch".to_string(),
        ErrorKind::InvalidAlgorithm => "algorithm not allowed for this key".to_string(),
        ErrorKind::MissingRequiredClaim(claim) => format!("missing required claim {claim}"),
        other => format!("token validation failed: {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(AuthConfig::new(
            "http://127.0.0.1:1/jwks.json",
            "crewdesk",
        ))
    }

    #[tokio::test]
    async fn test_garbage_token_fails_before_any_fetch() {
        // A structurally invalid token never reaches the network: the
        // JWKS URL above is unroutable, so reaching it would surface as
        // KeySetUnavailable instead.
        let result = verifier().verify("not-a-jwt").await;
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[tokio::test]
    async fn test_symmetric_token_fails_before_any_fetch() {
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "user_1", "exp": 4102444800u64 }),
            &jsonwebtoken::EncodingKey::from_secret(b"shared-secret"),
        )
        .unwrap();

        let result = verifier().verify(&token).await;
        match result {
            Err(AuthError::InvalidToken(msg)) => {
                assert!(msg.contains("symmetric"), "unexpected message: {msg}")
            }
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_allow_list_rejects_every_token() {
        // Fields are public, so a struct-literal config can bypass the
        // builder's RS256 fallback; the allow-list check must still
        // fail closed rather than panic.
        let config = AuthConfig {
            jwks_url: "http://127.0.0.1:1/jwks.json".to_string(),
            audience: "crewdesk".to_string(),
            allowed_algorithms: Vec::new(),
            fetch_timeout: std::time::Duration::from_secs(1),
            cache_policy: crate::jwks::KeyCachePolicy::NoCache,
        };
        let verifier = TokenVerifier::new(config);

        use base64::Engine as _;
        let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let mut header = jsonwebtoken::Header::new(Algorithm::RS256);
        header.kid = Some("test-key-1".to_string());
        let head = b64.encode(serde_json::to_vec(&header).unwrap());
        let payload =
            b64.encode(serde_json::to_vec(&serde_json::json!({ "sub": "x", "exp": 1u64 })).unwrap());
        let token = format!("{head}.{payload}.AAAA");

        let result = verifier.verify(&token).await;
        match result {
            Err(AuthError::InvalidToken(msg)) => {
                assert!(msg.contains("allow-list"), "unexpected message: {msg}")
            }
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_kid_fails_before_any_fetch() {
        // RS256 header without a kid; signed bytes are irrelevant since
        // the kid check precedes key resolution. Use a syntactically
        // valid but unverifiable token.
        let header = jsonwebtoken::Header::new(Algorithm::RS256);
        assert!(header.kid.is_none());
        // Build the compact form by hand: header.payload.signature
        use base64::Engine as _;
        let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let head = b64.encode(serde_json::to_vec(&header).unwrap());
        let payload =
            b64.encode(serde_json::to_vec(&serde_json::json!({ "sub": "x", "exp": 1u64 })).unwrap());
        let token = format!("{head}.{payload}.AAAA");

        let result = verifier().verify(&token).await;
        match result {
            Err(AuthError::InvalidToken(msg)) => {
                assert!(msg.contains("kid"), "unexpected message: {msg}")
            }
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }
}

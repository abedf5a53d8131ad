//! Authentication configuration

use jsonwebtoken::Algorithm;
use std::time::Duration;

use crate::jwks::KeyCachePolicy;

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Well-known JWKS URL published by the identity provider
    pub jwks_url: String,
    /// Expected `aud` claim
    pub audience: String,
    /// Allowed signature algorithms. Asymmetric only; symmetric entries
    /// are stripped on construction so a misconfigured allow-list can
    /// never open the key-confusion hole.
    pub allowed_algorithms: Vec<Algorithm>,
    /// Timeout applied to the outbound JWKS fetch
    pub fetch_timeout: Duration,
    /// Key-set caching policy
    pub cache_policy: KeyCachePolicy,
}

impl AuthConfig {
    pub fn new(jwks_url: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            jwks_url: jwks_url.into(),
            audience: audience.into(),
            allowed_algorithms: vec![Algorithm::RS256],
            fetch_timeout: Duration::from_secs(10),
            cache_policy: KeyCachePolicy::NoCache,
        }
    }

    /// Replace the algorithm allow-list, silently dropping symmetric entries.
    /// An allow-list left empty by the filter falls back to RS256.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.allowed_algorithms = algorithms
            .into_iter()
            .filter(|alg| !is_symmetric(*alg))
            .collect();
        if self.allowed_algorithms.is_empty() {
            self.allowed_algorithms.push(Algorithm::RS256);
        }
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_cache_policy(mut self, policy: KeyCachePolicy) -> Self {
        self.cache_policy = policy;
        self
    }
}

/// Whether an algorithm uses a shared secret rather than a key pair.
pub(crate) fn is_symmetric(alg: Algorithm) -> bool {
    matches!(alg, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allow_list_is_rs256_only() {
        let config = AuthConfig::new("https://issuer.example/jwks.json", "crewdesk");
        assert_eq!(config.allowed_algorithms, vec![Algorithm::RS256]);
    }

    #[test]
    fn test_symmetric_algorithms_are_stripped() {
        let config = AuthConfig::new("https://issuer.example/jwks.json", "crewdesk")
            .with_algorithms(vec![Algorithm::HS256, Algorithm::RS256, Algorithm::HS512]);
        assert_eq!(config.allowed_algorithms, vec![Algorithm::RS256]);
    }

    #[test]
    fn test_is_symmetric() {
        assert!(is_symmetric(Algorithm::HS256));
        assert!(is_symmetric(Algorithm::HS384));
        assert!(is_symmetric(Algorithm::HS512));
        assert!(!is_symmetric(Algorithm::RS256));
        assert!(!is_symmetric(Algorithm::ES256));
    }
}

//! JWKS client: remote key-set fetch with an injectable cache policy
//!
//! The key set is an external, mutable, versionless resource that can
//! change between requests (key rotation). The observed upstream
//! behavior is a fresh fetch per verification; `KeyCachePolicy::Ttl`
//! makes the alternative explicit instead of hard-coding either choice.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::error::AuthError;

/// Public signing key descriptor as published by the issuer.
///
/// Only the fields needed to reconstruct an RSA verification key are
/// kept; anything else in the JWKS entry is ignored rather than trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,
    pub kid: String,
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    /// RSA modulus, base64url
    pub n: String,
    /// RSA public exponent, base64url
    pub e: String,
}

/// The issuer's published key set (`keys` array of the JWKS document).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    /// Find the key whose identifier matches the token's declared `kid`.
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|k| k.kid == kid)
    }
}

/// Key-set caching policy.
///
/// `NoCache` fetches the key set on every verification. `Ttl` keeps the
/// last fetched set for the given duration, with a forced refresh when a
/// token references an unknown `kid` (key-rotation race).
#[derive(Debug, Clone, Default)]
pub enum KeyCachePolicy {
    #[default]
    NoCache,
    Ttl(Duration),
}

struct CachedKeys {
    fetched_at: Instant,
    keys: JwkSet,
}

struct CacheSlot {
    ttl: Duration,
    slot: RwLock<Option<CachedKeys>>,
}

/// Client for the issuer's JWKS endpoint.
#[derive(Clone)]
pub struct KeySetClient {
    http: reqwest::Client,
    url: String,
    timeout: Duration,
    cache: Option<Arc<CacheSlot>>,
}

impl KeySetClient {
    pub fn new(url: impl Into<String>, timeout: Duration, policy: KeyCachePolicy) -> Self {
        let cache = match policy {
            KeyCachePolicy::NoCache => None,
            KeyCachePolicy::Ttl(ttl) => Some(Arc::new(CacheSlot {
                ttl,
                slot: RwLock::new(None),
            })),
        };

        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            timeout,
            cache,
        }
    }

    /// Whether a cache is configured (regardless of freshness).
    pub fn is_caching(&self) -> bool {
        self.cache.is_some()
    }

    /// Current key set: the cached copy if still fresh, otherwise a
    /// fresh fetch. With `NoCache` this is always a network call.
    pub async fn current(&self) -> Result<JwkSet, AuthError> {
        if let Some(cache) = &self.cache {
            let guard = cache.slot.read().await;
            if let Some(cached) = guard.as_ref() {
                if cached.fetched_at.elapsed() < cache.ttl {
                    return Ok(cached.keys.clone());
                }
            }
        }

        self.refresh().await
    }

    /// Fetch the key set from the issuer, replacing any cached copy.
    pub async fn refresh(&self) -> Result<JwkSet, AuthError> {
        let keys = self.fetch().await?;

        if let Some(cache) = &self.cache {
            let mut guard = cache.slot.write().await;
            *guard = Some(CachedKeys {
                fetched_at: Instant::now(),
                keys: keys.clone(),
            });
        }

        Ok(keys)
    }

    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        let response = self
            .http
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(format!("fetch failed: {e}")))?
            .error_for_status()
            .map_err(|e| AuthError::KeySetUnavailable(format!("fetch failed: {e}")))?;

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(format!("malformed key set: {e}")))
    }
}

//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Identity provider's published JWKS endpoint
    pub jwks_url: String,

    /// Expected `aud` claim on inbound tokens
    pub jwt_audience: String,

    /// Timeout for the outbound JWKS fetch, in seconds
    pub jwks_timeout_secs: u64,

    /// Optional key-set cache TTL, in seconds. Absent means every
    /// verification fetches a fresh key set.
    pub jwks_cache_ttl_secs: Option<u64>,

    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            jwks_url: env::var("JWKS_URL")
                .map_err(|_| anyhow::anyhow!("JWKS_URL is required"))?,
            jwt_audience: env::var("JWT_AUDIENCE")
                .map_err(|_| anyhow::anyhow!("JWT_AUDIENCE is required"))?,

            jwks_timeout_secs: env::var("JWKS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            jwks_cache_ttl_secs: env::var("JWKS_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "crewdesk=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
        };

        Ok(config)
    }
}

//! Crewdesk application composition root
//!
//! Composes the domain router with shared infrastructure routes.

use std::time::Duration;

use axum::Router;
use crewdesk_analysts::{AnalystRepositories, AnalystsState};
use crewdesk_auth::{AuthBackend, AuthConfig, KeyCachePolicy};
use crewdesk_common::Config;
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    // Create repositories
    let repos = AnalystRepositories::new(pool);

    // Token verification against the identity provider's JWKS
    let cache_policy = match config.jwks_cache_ttl_secs {
        Some(ttl) => KeyCachePolicy::Ttl(Duration::from_secs(ttl)),
        None => KeyCachePolicy::NoCache,
    };
    let auth_config = AuthConfig::new(config.jwks_url.clone(), config.jwt_audience.clone())
        .with_fetch_timeout(Duration::from_secs(config.jwks_timeout_secs))
        .with_cache_policy(cache_policy);
    let auth = AuthBackend::new(auth_config);

    // Create Analysts domain state
    let state = AnalystsState { repos, auth };

    // Build router — compose domain routers with shared infrastructure routes
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Crewdesk API v0.1.0" }))
        .merge(crewdesk_analysts::routes().with_state(state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

//! Authentication middleware for the Crewdesk API
//!
//! Verifies inbound bearer tokens against the identity provider's
//! published JWKS and provides axum extractors that work with any
//! domain state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod error;
mod extractors;
mod jwks;
mod jwt;
mod verifier;

pub use backend::AuthBackend;
pub use claims::Claims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use jwks::{Jwk, JwkSet, KeyCachePolicy, KeySetClient};
pub use verifier::TokenVerifier;

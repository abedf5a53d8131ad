//! API layer for the Analysts domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::AnalystsState;
pub use routes::routes;

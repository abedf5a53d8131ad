//! Route definitions for the Analysts domain API

use axum::{routing::get, Router};

use super::handlers::{analysts, auth, salaries, vacations};
use super::middleware::AnalystsState;

/// Create analyst CRUD routes
fn analyst_routes() -> Router<AnalystsState> {
    Router::new()
        .route(
            "/api/analysts",
            get(analysts::list_analysts).post(analysts::create_analyst),
        )
        .route(
            "/api/analysts/{id}",
            get(analysts::get_analyst)
                .put(analysts::update_analyst)
                .delete(analysts::delete_analyst),
        )
}

/// Create vacation period routes
fn vacation_routes() -> Router<AnalystsState> {
    Router::new().route(
        "/api/analysts/{id}/vacation-periods",
        get(vacations::list_vacation_periods).post(vacations::create_vacation_period),
    )
}

/// Create salary history routes
fn salary_routes() -> Router<AnalystsState> {
    Router::new().route(
        "/api/analysts/{id}/salary-history",
        get(salaries::list_salary_history).post(salaries::create_salary_entry),
    )
}

/// Create auth introspection routes
fn auth_routes() -> Router<AnalystsState> {
    Router::new().route("/api/auth/whoami", get(auth::whoami))
}

/// Create all Analysts domain API routes
pub fn routes() -> Router<AnalystsState> {
    Router::new()
        .merge(analyst_routes())
        .merge(vacation_routes())
        .merge(salary_routes())
        .merge(auth_routes())
}

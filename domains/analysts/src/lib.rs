//! Analysts domain: analyst records with nested vacation periods and salary history

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export repository types
pub use repository::{
    apply_salary_adjustment_tx, insert_salary_entry_tx, insert_vacation_period_tx,
    AnalystRepositories, AnalystRepository, SalaryHistoryRepository, VacationRepository,
};

// Re-export API types
pub use api::routes;
pub use api::AnalystsState;

// Re-export auth types from crewdesk-auth for convenience
pub use crewdesk_auth::{AuthBackend, AuthConfig, AuthError, AuthUser, Claims};

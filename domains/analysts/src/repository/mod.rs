//! Repository implementations for the Analysts domain

pub mod analysts;
pub mod salary_history;
pub mod transactions;
pub mod vacations;

use sqlx::PgPool;

pub use analysts::AnalystRepository;
pub use salary_history::SalaryHistoryRepository;
pub use transactions::{
    apply_salary_adjustment_tx, insert_salary_entry_tx, insert_vacation_period_tx,
};
pub use vacations::VacationRepository;

/// Combined repository access for the Analysts domain
#[derive(Clone)]
pub struct AnalystRepositories {
    pub analysts: AnalystRepository,
    pub vacations: VacationRepository,
    pub salary_history: SalaryHistoryRepository,
}

impl AnalystRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            analysts: AnalystRepository::new(pool.clone()),
            vacations: VacationRepository::new(pool.clone()),
            salary_history: SalaryHistoryRepository::new(pool),
        }
    }
}

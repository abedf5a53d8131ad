//! Salary history repository

use crate::domain::entities::{Analyst, NewSalaryEntry, SalaryHistoryEntry};
use crate::repository::transactions::{apply_salary_adjustment_tx, insert_salary_entry_tx};
use crewdesk_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct SalaryHistoryRepository {
    pool: PgPool,
}

impl SalaryHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List salary history for an analyst, most recent adjustment first
    pub async fn list_for_analyst(&self, analyst_id: i32) -> Result<Vec<SalaryHistoryEntry>> {
        let rows: Vec<SalaryHistoryEntry> = sqlx::query_as(
            r#"
            SELECT id, analyst_id, previous_amount, new_amount, adjustment_date,
                   notes, created_at
            FROM salary_history
            WHERE analyst_id = $1
            ORDER BY adjustment_date DESC, id DESC
            "#,
        )
        .bind(analyst_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Record a salary adjustment and reflect it on the analyst row, atomically.
    ///
    /// When the request carries no `previous_amount`, the analyst's current
    /// salary at the time of the adjustment is recorded instead. Returns
    /// `None` if the analyst does not exist.
    pub async fn create(
        &self,
        analyst_id: i32,
        entry: &NewSalaryEntry,
    ) -> Result<Option<SalaryHistoryEntry>> {
        let mut tx = self.pool.begin().await?;

        let analyst: Option<Analyst> = sqlx::query_as(
            r#"
            SELECT id, name, position, start_date, is_active, day_off_enabled,
                   observations, performance, current_salary, last_salary_adjustment,
                   created_at, updated_at
            FROM analysts
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(analyst_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(analyst) = analyst else {
            return Ok(None);
        };

        let previous_amount = entry.previous_amount.or(analyst.current_salary);
        let created = insert_salary_entry_tx(&mut tx, analyst.id, previous_amount, entry).await?;
        apply_salary_adjustment_tx(&mut tx, analyst.id, entry.new_amount, entry.adjustment_date)
            .await?;

        tx.commit().await?;

        Ok(Some(created))
    }
}

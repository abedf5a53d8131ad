//! Vacation period repository

use crate::domain::entities::{NewVacationPeriod, VacationPeriod};
use crate::repository::transactions::insert_vacation_period_tx;
use crewdesk_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct VacationRepository {
    pool: PgPool,
}

impl VacationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List vacation periods for an analyst, earliest first
    pub async fn list_for_analyst(&self, analyst_id: i32) -> Result<Vec<VacationPeriod>> {
        let rows: Vec<VacationPeriod> = sqlx::query_as(
            r#"
            SELECT id, analyst_id, start_date, end_date, created_at
            FROM vacation_periods
            WHERE analyst_id = $1
            ORDER BY start_date ASC
            "#,
        )
        .bind(analyst_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Create a vacation period for an analyst
    pub async fn create(
        &self,
        analyst_id: i32,
        period: &NewVacationPeriod,
    ) -> Result<VacationPeriod> {
        let mut tx = self.pool.begin().await?;
        let created = insert_vacation_period_tx(&mut tx, analyst_id, period).await?;
        tx.commit().await?;

        Ok(created)
    }
}

//! Analyst repository

use crate::domain::entities::{Analyst, AnalystDetail, NewAnalyst, NewVacationPeriod};
use crate::repository::transactions::insert_vacation_period_tx;
use crate::repository::{SalaryHistoryRepository, VacationRepository};
use crewdesk_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AnalystRepository {
    pool: PgPool,
}

impl AnalystRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all analysts (summary projection, no nested collections)
    pub async fn list(&self) -> Result<Vec<Analyst>> {
        let rows: Vec<Analyst> = sqlx::query_as(
            r#"
            SELECT id, name, position, start_date, is_active, day_off_enabled,
                   observations, performance, current_salary, last_salary_adjustment,
                   created_at, updated_at
            FROM analysts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Find analyst by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Analyst>> {
        let row: Option<Analyst> = sqlx::query_as(
            r#"
            SELECT id, name, position, start_date, is_active, day_off_enabled,
                   observations, performance, current_salary, last_salary_adjustment,
                   created_at, updated_at
            FROM analysts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Detailed projection: analyst plus vacation periods and salary history
    pub async fn get_detail(
        &self,
        id: i32,
        vacations: &VacationRepository,
        salary_history: &SalaryHistoryRepository,
    ) -> Result<Option<AnalystDetail>> {
        let Some(analyst) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let vacation_periods = vacations.list_for_analyst(id).await?;
        let salary_entries = salary_history.list_for_analyst(id).await?;

        Ok(Some(AnalystDetail {
            analyst,
            vacation_periods,
            salary_history: salary_entries,
        }))
    }

    /// Create an analyst and, atomically with it, any supplied vacation periods.
    pub async fn create(
        &self,
        input: &NewAnalyst,
        vacations: &[NewVacationPeriod],
    ) -> Result<AnalystDetail> {
        let mut tx = self.pool.begin().await?;

        let analyst: Analyst = sqlx::query_as(
            r#"
            INSERT INTO analysts (name, position, start_date, is_active, day_off_enabled,
                                  observations, performance, current_salary,
                                  last_salary_adjustment, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW())
            RETURNING id, name, position, start_date, is_active, day_off_enabled,
                      observations, performance, current_salary, last_salary_adjustment,
                      created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.position)
        .bind(input.start_date)
        .bind(input.is_active)
        .bind(input.day_off_enabled)
        .bind(&input.observations)
        .bind(&input.performance)
        .bind(input.current_salary)
        .bind(input.last_salary_adjustment)
        .fetch_one(&mut *tx)
        .await?;

        let mut vacation_periods = Vec::with_capacity(vacations.len());
        for period in vacations {
            vacation_periods.push(insert_vacation_period_tx(&mut tx, analyst.id, period).await?);
        }

        tx.commit().await?;

        Ok(AnalystDetail {
            analyst,
            vacation_periods,
            salary_history: Vec::new(),
        })
    }

    /// Full replacement of the named fields. Nested collections are managed
    /// through their own endpoints.
    pub async fn update(&self, id: i32, input: &NewAnalyst) -> Result<Option<Analyst>> {
        let row: Option<Analyst> = sqlx::query_as(
            r#"
            UPDATE analysts
            SET name = $2, position = $3, start_date = $4, is_active = $5,
                day_off_enabled = $6, observations = $7, performance = $8,
                current_salary = $9, last_salary_adjustment = $10, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, position, start_date, is_active, day_off_enabled,
                      observations, performance, current_salary, last_salary_adjustment,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.position)
        .bind(input.start_date)
        .bind(input.is_active)
        .bind(input.day_off_enabled)
        .bind(&input.observations)
        .bind(&input.performance)
        .bind(input.current_salary)
        .bind(input.last_salary_adjustment)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Delete an analyst. Vacation periods and salary history cascade.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM analysts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

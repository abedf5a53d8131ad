//! Transactional free functions for the Analysts domain (Zero2Prod pattern)

use crate::domain::entities::{NewSalaryEntry, NewVacationPeriod, SalaryHistoryEntry, VacationPeriod};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction};

/// Insert a vacation period within an existing transaction.
pub async fn insert_vacation_period_tx(
    transaction: &mut Transaction<'_, Postgres>,
    analyst_id: i32,
    period: &NewVacationPeriod,
) -> std::result::Result<VacationPeriod, sqlx::Error> {
    let created: VacationPeriod = sqlx::query_as(
        r#"
        INSERT INTO vacation_periods (analyst_id, start_date, end_date, created_at)
        VALUES ($1, $2, $3, NOW())
        RETURNING id, analyst_id, start_date, end_date, created_at
        "#,
    )
    .bind(analyst_id)
    .bind(period.start_date)
    .bind(period.end_date)
    .fetch_one(&mut **transaction)
    .await?;

    Ok(created)
}

/// Insert a salary-history entry within an existing transaction.
pub async fn insert_salary_entry_tx(
    transaction: &mut Transaction<'_, Postgres>,
    analyst_id: i32,
    previous_amount: Option<Decimal>,
    entry: &NewSalaryEntry,
) -> std::result::Result<SalaryHistoryEntry, sqlx::Error> {
    let created: SalaryHistoryEntry = sqlx::query_as(
        r#"
        INSERT INTO salary_history (analyst_id, previous_amount, new_amount,
                                    adjustment_date, notes, created_at)
        VALUES ($1, $2, $3, $4, $5, NOW())
        RETURNING id, analyst_id, previous_amount, new_amount, adjustment_date,
                  notes, created_at
        "#,
    )
    .bind(analyst_id)
    .bind(previous_amount)
    .bind(entry.new_amount)
    .bind(entry.adjustment_date)
    .bind(&entry.notes)
    .fetch_one(&mut **transaction)
    .await?;

    Ok(created)
}

/// Reflect a salary adjustment on the analyst row within an existing transaction.
pub async fn apply_salary_adjustment_tx(
    transaction: &mut Transaction<'_, Postgres>,
    analyst_id: i32,
    new_amount: Decimal,
    adjustment_date: NaiveDate,
) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE analysts
        SET current_salary = $2, last_salary_adjustment = $3, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(analyst_id)
    .bind(new_amount)
    .bind(adjustment_date)
    .execute(&mut **transaction)
    .await?;

    Ok(())
}

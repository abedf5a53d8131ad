//! Analyst aggregate: analyst records, vacation periods, salary history.
//!
//! These structs mirror the storage surface (snake_case columns); the
//! camelCase API surface lives in the handler DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An analyst employee record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Analyst {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub is_active: bool,
    pub day_off_enabled: bool,
    pub observations: Option<String>,
    pub performance: Option<String>,
    pub current_salary: Option<Decimal>,
    pub last_salary_adjustment: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A booked vacation period belonging to an analyst.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct VacationPeriod {
    pub id: i32,
    pub analyst_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// One salary adjustment in an analyst's history.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SalaryHistoryEntry {
    pub id: i32,
    pub analyst_id: i32,
    pub previous_amount: Option<Decimal>,
    pub new_amount: Decimal,
    pub adjustment_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Detailed projection: the analyst plus its nested collections.
#[derive(Debug, Clone, Serialize)]
pub struct AnalystDetail {
    pub analyst: Analyst,
    pub vacation_periods: Vec<VacationPeriod>,
    pub salary_history: Vec<SalaryHistoryEntry>,
}

/// Field set for creating or fully replacing an analyst.
#[derive(Debug, Clone)]
pub struct NewAnalyst {
    pub name: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub is_active: bool,
    pub day_off_enabled: bool,
    pub observations: Option<String>,
    pub performance: Option<String>,
    pub current_salary: Option<Decimal>,
    pub last_salary_adjustment: Option<NaiveDate>,
}

/// Field set for creating a vacation period.
#[derive(Debug, Clone)]
pub struct NewVacationPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Field set for recording a salary adjustment.
#[derive(Debug, Clone)]
pub struct NewSalaryEntry {
    pub previous_amount: Option<Decimal>,
    pub new_amount: Decimal,
    pub adjustment_date: NaiveDate,
    pub notes: Option<String>,
}

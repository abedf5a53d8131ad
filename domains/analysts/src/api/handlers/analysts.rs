//! Analyst CRUD handlers
//!
//! The external surface is camelCase; translation to the snake_case
//! storage surface happens here, in the request/response DTOs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use crewdesk_auth::AuthUser;
use crewdesk_common::{Error, Result, ValidatedJson};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::AnalystsState;
use crate::domain::entities::{
    Analyst, AnalystDetail, NewAnalyst, NewVacationPeriod, SalaryHistoryEntry, VacationPeriod,
};

fn default_true() -> bool {
    true
}

/// Request body for creating or fully replacing an analyst
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalystRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 200))]
    pub position: String,

    pub start_date: NaiveDate,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub day_off_enabled: bool,

    #[serde(default)]
    pub observations: Option<String>,

    #[serde(default)]
    pub performance: Option<String>,

    #[serde(default)]
    pub current_salary: Option<Decimal>,

    #[serde(default)]
    pub last_salary_adjustment: Option<NaiveDate>,

    /// Vacation periods persisted atomically with the analyst on create.
    /// Ignored on update; nested collections have their own endpoints.
    #[serde(default)]
    pub vacation_periods: Vec<VacationPeriodInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationPeriodInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl AnalystRequest {
    pub fn as_new_analyst(&self) -> NewAnalyst {
        NewAnalyst {
            name: self.name.clone(),
            position: self.position.clone(),
            start_date: self.start_date,
            is_active: self.is_active,
            day_off_enabled: self.day_off_enabled,
            observations: self.observations.clone(),
            performance: self.performance.clone(),
            current_salary: self.current_salary,
            last_salary_adjustment: self.last_salary_adjustment,
        }
    }

    pub fn vacation_inputs(&self) -> Result<Vec<NewVacationPeriod>> {
        self.vacation_periods
            .iter()
            .map(|p| {
                check_period_order(p.start_date, p.end_date)?;
                Ok(NewVacationPeriod {
                    start_date: p.start_date,
                    end_date: p.end_date,
                })
            })
            .collect()
    }
}

/// A vacation period must not end before it starts.
pub(crate) fn check_period_order(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if end < start {
        return Err(Error::Validation(
            "Vacation period must not end before it starts".to_string(),
        ));
    }
    Ok(())
}

/// Analyst summary response (camelCase external surface)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystResponse {
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

impl From<Analyst> for AnalystResponse {
    fn from(analyst: Analyst) -> Self {
        Self {
            id: analyst.id,
            name: analyst.name,
            position: analyst.position,
            start_date: analyst.start_date,
            is_active: analyst.is_active,
            day_off_enabled: analyst.day_off_enabled,
            observations: analyst.observations,
            performance: analyst.performance,
            current_salary: analyst.current_salary,
            last_salary_adjustment: analyst.last_salary_adjustment,
            created_at: analyst.created_at,
            updated_at: analyst.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationPeriodResponse {
    pub id: i32,
    pub analyst_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<VacationPeriod> for VacationPeriodResponse {
    fn from(period: VacationPeriod) -> Self {
        Self {
            id: period.id,
            analyst_id: period.analyst_id,
            start_date: period.start_date,
            end_date: period.end_date,
            created_at: period.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryHistoryResponse {
    pub id: i32,
    pub analyst_id: i32,
    pub previous_amount: Option<Decimal>,
    pub new_amount: Decimal,
    pub adjustment_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<SalaryHistoryEntry> for SalaryHistoryResponse {
    fn from(entry: SalaryHistoryEntry) -> Self {
        Self {
            id: entry.id,
            analyst_id: entry.analyst_id,
            previous_amount: entry.previous_amount,
            new_amount: entry.new_amount,
            adjustment_date: entry.adjustment_date,
            notes: entry.notes,
            created_at: entry.created_at,
        }
    }
}

/// Analyst detail response: summary plus nested collections
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystDetailResponse {
    #[serde(flatten)]
    pub analyst: AnalystResponse,
    pub vacation_periods: Vec<VacationPeriodResponse>,
    pub salary_history: Vec<SalaryHistoryResponse>,
}

impl From<AnalystDetail> for AnalystDetailResponse {
    fn from(detail: AnalystDetail) -> Self {
        Self {
            analyst: detail.analyst.into(),
            vacation_periods: detail
                .vacation_periods
                .into_iter()
                .map(Into::into)
                .collect(),
            salary_history: detail.salary_history.into_iter().map(Into::into).collect(),
        }
    }
}

/// List all analysts
///
/// **GET /api/analysts**
pub async fn list_analysts(
    _user: AuthUser,
    State(state): State<AnalystsState>,
) -> Result<Json<Vec<AnalystResponse>>> {
    let analysts = state.repos.analysts.list().await?;
    Ok(Json(analysts.into_iter().map(Into::into).collect()))
}

/// Create a new analyst
///
/// **POST /api/analysts**
///
/// Any supplied vacation periods are persisted atomically with the analyst.
pub async fn create_analyst(
    _user: AuthUser,
    State(state): State<AnalystsState>,
    ValidatedJson(request): ValidatedJson<AnalystRequest>,
) -> Result<(StatusCode, Json<AnalystDetailResponse>)> {
    let vacations = request.vacation_inputs()?;
    let detail = state
        .repos
        .analysts
        .create(&request.as_new_analyst(), &vacations)
        .await?;

    Ok((StatusCode::CREATED, Json(detail.into())))
}

/// Get a single analyst with nested vacation periods and salary history
///
/// **GET /api/analysts/{id}**
pub async fn get_analyst(
    _user: AuthUser,
    State(state): State<AnalystsState>,
    Path(id): Path<i32>,
) -> Result<Json<AnalystDetailResponse>> {
    let detail = state
        .repos
        .analysts
        .get_detail(id, &state.repos.vacations, &state.repos.salary_history)
        .await?
        .ok_or_else(|| Error::NotFound("Analyst not found".to_string()))?;

    Ok(Json(detail.into()))
}

/// Replace an analyst's named fields
///
/// **PUT /api/analysts/{id}**
pub async fn update_analyst(
    _user: AuthUser,
    State(state): State<AnalystsState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<AnalystRequest>,
) -> Result<Json<AnalystResponse>> {
    let analyst = state
        .repos
        .analysts
        .update(id, &request.as_new_analyst())
        .await?
        .ok_or_else(|| Error::NotFound("Analyst not found".to_string()))?;

    Ok(Json(analyst.into()))
}

/// Delete an analyst
///
/// **DELETE /api/analysts/{id}**
pub async fn delete_analyst(
    _user: AuthUser,
    State(state): State<AnalystsState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let deleted = state.repos.analysts.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Analyst not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

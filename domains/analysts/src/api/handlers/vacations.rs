//! Vacation period handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use crewdesk_auth::AuthUser;
use crewdesk_common::{Error, Result, ValidatedJson};
use serde::Deserialize;
use validator::Validate;

use crate::api::handlers::analysts::{check_period_order, VacationPeriodResponse};
use crate::api::middleware::AnalystsState;
use crate::domain::entities::NewVacationPeriod;

/// Request body for booking a vacation period
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VacationPeriodRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// List an analyst's vacation periods
///
/// **GET /api/analysts/{id}/vacation-periods**
pub async fn list_vacation_periods(
    _user: AuthUser,
    State(state): State<AnalystsState>,
    Path(analyst_id): Path<i32>,
) -> Result<Json<Vec<VacationPeriodResponse>>> {
    state
        .repos
        .analysts
        .get_by_id(analyst_id)
        .await?
        .ok_or_else(|| Error::NotFound("Analyst not found".to_string()))?;

    let periods = state.repos.vacations.list_for_analyst(analyst_id).await?;
    Ok(Json(periods.into_iter().map(Into::into).collect()))
}

/// Book a vacation period for an analyst
///
/// **POST /api/analysts/{id}/vacation-periods**
pub async fn create_vacation_period(
    _user: AuthUser,
    State(state): State<AnalystsState>,
    Path(analyst_id): Path<i32>,
    ValidatedJson(request): ValidatedJson<VacationPeriodRequest>,
) -> Result<(StatusCode, Json<VacationPeriodResponse>)> {
    check_period_order(request.start_date, request.end_date)?;

    state
        .repos
        .analysts
        .get_by_id(analyst_id)
        .await?
        .ok_or_else(|| Error::NotFound("Analyst not found".to_string()))?;

    let period = state
        .repos
        .vacations
        .create(
            analyst_id,
            &NewVacationPeriod {
                start_date: request.start_date,
                end_date: request.end_date,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(period.into())))
}

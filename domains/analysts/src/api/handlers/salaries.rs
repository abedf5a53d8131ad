//! Salary history handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use crewdesk_auth::AuthUser;
use crewdesk_common::{Error, Result, ValidatedJson};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::api::handlers::analysts::SalaryHistoryResponse;
use crate::api::middleware::AnalystsState;
use crate::domain::entities::NewSalaryEntry;

/// Request body for recording a salary adjustment
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SalaryEntryRequest {
    #[serde(default)]
    pub previous_amount: Option<Decimal>,

    pub new_amount: Decimal,

    pub adjustment_date: NaiveDate,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// A salary adjustment must carry a positive amount.
fn check_salary_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::Validation(
            "Salary amount must be positive".to_string(),
        ));
    }
    Ok(())
}

/// List an analyst's salary history
///
/// **GET /api/analysts/{id}/salary-history**
pub async fn list_salary_history(
    _user: AuthUser,
    State(state): State<AnalystsState>,
    Path(analyst_id): Path<i32>,
) -> Result<Json<Vec<SalaryHistoryResponse>>> {
    state
        .repos
        .analysts
        .get_by_id(analyst_id)
        .await?
        .ok_or_else(|| Error::NotFound("Analyst not found".to_string()))?;

    let entries = state
        .repos
        .salary_history
        .list_for_analyst(analyst_id)
        .await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Record a salary adjustment
///
/// **POST /api/analysts/{id}/salary-history**
///
/// Also moves the analyst's current salary and last adjustment date,
/// in the same transaction.
pub async fn create_salary_entry(
    _user: AuthUser,
    State(state): State<AnalystsState>,
    Path(analyst_id): Path<i32>,
    ValidatedJson(request): ValidatedJson<SalaryEntryRequest>,
) -> Result<(StatusCode, Json<SalaryHistoryResponse>)> {
    check_salary_amount(request.new_amount)?;

    let entry = state
        .repos
        .salary_history
        .create(
            analyst_id,
            &NewSalaryEntry {
                previous_amount: request.previous_amount,
                new_amount: request.new_amount,
                adjustment_date: request.adjustment_date,
                notes: request.notes.clone(),
            },
        )
        .await?
        .ok_or_else(|| Error::NotFound("Analyst not found".to_string()))?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_entry_request_accepts_camel_case_payload() {
        let body = serde_json::json!({
            "newAmount": "6100.00",
            "adjustmentDate": "2024-06-01",
            "notes": "Annual review"
        });

        let request: SalaryEntryRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.new_amount, Decimal::new(610000, 2));
        assert!(request.previous_amount.is_none());
        assert_eq!(request.notes.as_deref(), Some("Annual review"));
    }

    #[test]
    fn test_non_positive_salary_amount_is_rejected() {
        assert!(check_salary_amount(Decimal::ZERO).is_err());
        assert!(check_salary_amount(Decimal::new(-610000, 2)).is_err());
        assert!(check_salary_amount(Decimal::new(610000, 2)).is_ok());
    }
}

//! HTTP handlers for the calculator API.
//!
//! Handlers validate the payload, call into the engine, and map errors to
//! JSON `{message}` bodies with 4xx/5xx statuses. Magnitude calculators
//! reject non-positive inputs here; the conversion tables themselves are
//! sign-agnostic.

use async_trait::async_trait;
use axum::extract::{FromRequest, Path, Query, Request, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::AppState;
use crate::core::features::{age, basic, percentage, units};
use crate::core::history::DEFAULT_HISTORY_LIMIT;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{
    AgeCalcRequest, AgeCalcResponse, BasicCalcRequest, BasicCalcResponse, CalculationRecord,
    HistoryQuery, LengthCalcRequest, LengthCalcResponse, MessageResponse, NewCalculation,
    PercentageCalcRequest, PercentageCalcResponse, TimeCalcRequest, TimeCalcResponse,
    WeightCalcRequest, WeightConversions,
};

/// `Json` wrapper whose rejection is an [`AppError`], so malformed bodies
/// produce the same `{message}` shape as every other validation failure.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}

fn ensure_positive(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::Validation(format!(
            "{} must be a positive number",
            field
        )));
    }
    Ok(())
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn basic_calc(
    ApiJson(req): ApiJson<BasicCalcRequest>,
) -> AppResult<Json<BasicCalcResponse>> {
    let result = basic::evaluate_expression(&req.expression)?;
    debug!(expression = %req.expression, result, "evaluated expression");
    Ok(Json(BasicCalcResponse { result }))
}

pub async fn age_calc(ApiJson(req): ApiJson<AgeCalcRequest>) -> AppResult<Json<AgeCalcResponse>> {
    let birth = age::parse_date(&req.birth_date)?;
    let reference = match req.calc_date.as_deref() {
        Some(value) => age::parse_date(value)?,
        None => Utc::now().date_naive(),
    };
    Ok(Json(age::calculate_age(birth, reference)?))
}

pub async fn weight_calc(
    ApiJson(req): ApiJson<WeightCalcRequest>,
) -> AppResult<Json<WeightConversions>> {
    ensure_positive(req.weight, "weight")?;
    Ok(Json(units::weight_conversions(req.weight, req.unit)))
}

pub async fn percentage_calc(
    ApiJson(req): ApiJson<PercentageCalcRequest>,
) -> AppResult<Json<PercentageCalcResponse>> {
    let result = percentage::calculate_percentage(req.value, req.percentage, req.calculation_type);
    Ok(Json(PercentageCalcResponse { result }))
}

pub async fn time_calc(
    ApiJson(req): ApiJson<TimeCalcRequest>,
) -> AppResult<Json<TimeCalcResponse>> {
    ensure_positive(req.time, "time")?;
    Ok(Json(units::time_conversions(req.time, req.from_unit, req.to_unit)))
}

pub async fn length_calc(
    ApiJson(req): ApiJson<LengthCalcRequest>,
) -> AppResult<Json<LengthCalcResponse>> {
    ensure_positive(req.length, "length")?;
    Ok(Json(units::length_conversions(
        req.length,
        req.from_unit,
        req.to_unit,
    )))
}

pub async fn history_list(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<CalculationRecord>>> {
    let limit = match query.limit.as_deref() {
        None => DEFAULT_HISTORY_LIMIT,
        Some(raw) => match raw.parse::<i64>() {
            Ok(n) if n > 0 => n as usize,
            _ => {
                return Err(AppError::Validation(
                    "limit must be a positive integer".to_string(),
                ))
            }
        },
    };
    let records = state.storage.calculations(limit).await?;
    Ok(Json(records))
}

pub async fn history_add(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewCalculation>,
) -> AppResult<(StatusCode, Json<CalculationRecord>)> {
    let record = state.storage.add_calculation(new).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn history_clear(
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse>> {
    state.storage.clear_calculations().await?;
    Ok(Json(MessageResponse {
        message: "Calculation history cleared".to_string(),
    }))
}

pub async fn history_remove(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<CalculationRecord>> {
    let record = state.storage.remove_calculation(id).await?;
    Ok(Json(record))
}

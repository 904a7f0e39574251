//! HTTP request handlers.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use crate::api::types::AnalyzeRequest;
use crate::domain::{parse_numbers, summarize, ServiceStatus, Summary};
use crate::error::{ErrorResponse, PlatformResult};
use crate::AppState;

/// Report that the service is running.
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = ServiceStatus)
    ),
    tag = "status"
)]
pub async fn status(State(state): State<AppState>) -> Json<ServiceStatus> {
    Json(ServiceStatus::capture(state.clock.as_ref()))
}

/// Aggregate a list of numbers into count, sum and average.
///
/// POST /analyze
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Aggregation complete", body = Summary),
        (status = 400, description = "Malformed input", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn analyze(payload: Result<Json<Value>, JsonRejection>) -> PlatformResult<Json<Summary>> {
    let Json(payload) = payload?;
    let request = AnalyzeRequest::try_from(payload)?;

    let numbers = parse_numbers(&request.numbers)?;
    let summary = summarize(&numbers)?;

    tracing::debug!(
        count = summary.count,
        sum = %summary.sum,
        average = %summary.average,
        "Analyzed numbers"
    );

    Ok(Json(summary))
}

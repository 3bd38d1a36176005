//! HTTP request handlers for the Tax Regime Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::run_comparison;
use crate::models::TaxInputs;
use crate::report::TaxReport;

use super::request::TaxInputsRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/compare", post(compare_handler))
        .route("/report", post(report_handler))
        .route("/regimes", get(regimes_handler))
        .with_state(state)
}

fn json_error(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Turns the request body into validated inputs, or the 400 response to
/// send back.
fn parse_inputs(
    correlation_id: Uuid,
    payload: Result<Json<TaxInputsRequest>, JsonRejection>,
) -> Result<TaxInputs, Response> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries serde's description of the problem
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::invalid_input(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(json_error(ApiErrorResponse::bad_request(error)));
        }
    };

    TaxInputs::try_from(request).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Input validation failed"
        );
        json_error(err.into())
    })
}

/// Handler for POST /compare.
///
/// Accepts the taxpayer's inputs and returns both regimes, the
/// recommendation, the itemized deductions and the audit trace.
async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxInputsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing comparison request");

    let inputs = match parse_inputs(correlation_id, payload) {
        Ok(inputs) => inputs,
        Err(response) => return response,
    };

    let result = run_comparison(&inputs, state.fiscal_year());
    info!(
        correlation_id = %correlation_id,
        calculation_id = %result.calculation_id,
        old_total = %result.comparison.old_regime.total_tax,
        new_total = %result.comparison.new_regime.total_tax,
        recommended = %result.comparison.recommended_regime,
        warnings = result.audit_trace.warnings.len(),
        duration_us = result.audit_trace.duration_us,
        "Comparison completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for POST /report.
///
/// Accepts the same body as `/compare` and returns the printable report.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxInputsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let inputs = match parse_inputs(correlation_id, payload) {
        Ok(inputs) => inputs,
        Err(response) => return response,
    };

    let fiscal_year = state.fiscal_year();
    let result = run_comparison(&inputs, fiscal_year);
    let report = TaxReport::build(
        &inputs,
        &result.comparison,
        Utc::now().date_naive(),
        fiscal_year,
    );

    let mut body = Vec::new();
    if let Err(err) = report.write_to(&mut body) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Report generation failed"
        );
        return json_error(err.into());
    }

    info!(
        correlation_id = %correlation_id,
        calculation_id = %result.calculation_id,
        pages = report.page_count(),
        "Report generated"
    );

    let disposition = format!("attachment; filename=\"{}\"", report.file_name());
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

/// Handler for GET /regimes.
///
/// Returns the fiscal-year rules the server is computing with.
async fn regimes_handler(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(state.fiscal_year().clone()),
    )
        .into_response()
}

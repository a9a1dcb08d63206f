//! HTTP request handlers for the labor engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate, pay_for, project_billing, report_subtotal, split_hours};
use crate::export::{export_file_name, payroll_csv};
use crate::models::{
    BillingPeriod, DailyReport, MAX_WORKERS_PER_REPORT, PayrollBatch, PayrollRecord, Project,
};

use super::request::{CreateReportRequest, PayrollRequest, SplitRequest};
use super::response::{
    ApiError, ApiErrorResponse, HealthResponse, PayrollCalculateResponse, PayrollExportResponse,
    PayrollRowResponse, ProjectBillingResponse, ReportCreatedResponse, ReportSubtotalResponse,
    SplitResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/split", post(split_handler))
        .route("/reports", post(create_report_handler))
        .route("/payroll/calculate", post(payroll_calculate_handler))
        .route("/payroll/export", post(payroll_export_handler))
        .route("/projects/billing", post(project_billing_handler))
        .with_state(state)
}

/// Handler for the GET /health endpoint.
async fn health_handler() -> impl IntoResponse {
    ok_response(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        correlation_id: Uuid::new_v4(),
    })
}

/// Handler for the POST /split endpoint.
///
/// Accepts a work interval and returns its regular/overtime split under
/// the configured shift rules.
async fn split_handler(
    State(state): State<AppState>,
    payload: Result<Json<SplitRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing split request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let interval = match request.interval() {
        Ok(interval) => interval,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %error.message,
                "Unparseable time of day"
            );
            return validation_response(error);
        }
    };

    match split_hours(&interval, state.config().shift_rules()) {
        Ok(split) => {
            info!(
                correlation_id = %correlation_id,
                regular_hours = %split.regular_hours,
                overtime_hours = %split.overtime_hours,
                "Split completed"
            );
            ok_response(SplitResponse {
                regular_hours: split.regular_hours,
                overtime_hours: split.overtime_hours,
                correlation_id,
            })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Split rejected");
            error_response(err.into())
        }
    }
}

/// Handler for the POST /reports endpoint.
///
/// Accepts a report draft, derives its hour split, and returns the
/// created report with crew totals.
async fn create_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report creation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    // The paper form has five name rows; a larger crew files two reports.
    if request.workers.len() > MAX_WORKERS_PER_REPORT {
        warn!(
            correlation_id = %correlation_id,
            workers = request.workers.len(),
            "Crew larger than the report form allows"
        );
        return validation_response(ApiError::crew_too_large(request.workers.len()));
    }

    let interval = match request.interval() {
        Ok(interval) => interval,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %error.message,
                "Unparseable time of day"
            );
            return validation_response(error);
        }
    };

    match split_hours(&interval, state.config().shift_rules()) {
        Ok(split) => {
            let report = DailyReport {
                id: Uuid::new_v4().to_string(),
                date: request.date,
                ship: request.ship,
                department: request.department,
                workers: request.workers,
                interval,
                split,
            };
            info!(
                correlation_id = %correlation_id,
                report_id = %report.id,
                ship = %report.ship,
                crew = report.crew_size(),
                "Report created"
            );
            let body = ReportCreatedResponse {
                crew_regular_hours: report.crew_regular_hours(),
                crew_overtime_hours: report.crew_overtime_hours(),
                crew_total_hours: report.crew_total_hours(),
                report,
                correlation_id,
            };
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Report rejected");
            error_response(err.into())
        }
    }
}

/// Handler for the POST /payroll/calculate endpoint.
///
/// Prices each entry and returns the rows together with the sheet totals.
async fn payroll_calculate_handler(
    State(_state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let period = match request.period.parse::<BillingPeriod>() {
        Ok(period) => period,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid payroll period");
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    let records: Vec<PayrollRecord> = request.entries.into_iter().map(Into::into).collect();
    let rows: Vec<PayrollRowResponse> = records.iter().map(payroll_row).collect();
    let totals = aggregate(&records);

    info!(
        correlation_id = %correlation_id,
        period = %period,
        entries = records.len(),
        grand_total = %totals.grand_total,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll calculated"
    );
    ok_response(PayrollCalculateResponse {
        period,
        rows,
        totals,
        correlation_id,
    })
}

/// Handler for the POST /payroll/export endpoint.
///
/// Renders the payroll CSV and returns it with its download file name.
async fn payroll_export_handler(
    State(_state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll export");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let period = match request.period.parse::<BillingPeriod>() {
        Ok(period) => period,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid payroll period");
            return error_response(err.into());
        }
    };

    let records: Vec<PayrollRecord> = request.entries.into_iter().map(Into::into).collect();
    let batch = PayrollBatch { period, records };
    let content = payroll_csv(&batch);
    let file_name = export_file_name(period);

    info!(
        correlation_id = %correlation_id,
        file_name = %file_name,
        bytes = content.len(),
        "Payroll exported"
    );
    ok_response(PayrollExportResponse {
        file_name,
        content,
        correlation_id,
    })
}

/// Handler for the POST /projects/billing endpoint.
///
/// Prices a project's linked reports and returns the billing summary.
async fn project_billing_handler(
    State(_state): State<AppState>,
    payload: Result<Json<Project>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing billing summary");

    let project = match payload {
        Ok(Json(project)) => project,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let subtotals: Vec<ReportSubtotalResponse> = project
        .linked_reports
        .iter()
        .map(|linked| ReportSubtotalResponse {
            date: linked.date,
            workers: linked.workers,
            hours: linked.regular_hours + linked.overtime_hours,
            amount: report_subtotal(linked, project.unit_price),
        })
        .collect();
    let total_hours = project.total_hours();
    let total_billing = project_billing(&project);

    info!(
        correlation_id = %correlation_id,
        project_id = %project.id,
        total_hours = %total_hours,
        total_billing = %total_billing,
        "Billing summarized"
    );
    ok_response(ProjectBillingResponse {
        project_id: project.id,
        total_hours,
        total_billing,
        subtotals,
        correlation_id,
    })
}

/// Prices one payroll record as a response row.
fn payroll_row(record: &PayrollRecord) -> PayrollRowResponse {
    PayrollRowResponse {
        employee_id: record.employee_id.clone(),
        employee_name: record.employee_name.clone(),
        regular_hours: record.regular_hours,
        overtime_hours: record.overtime_hours,
        hourly_wage: record.hourly_wage,
        overtime_multiplier: record.overtime_multiplier,
        pay: pay_for(record),
    }
}

/// Builds a 200 response with a JSON body.
fn ok_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Builds a 422 response from a validation error body.
fn validation_response(error: ApiError) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Builds a response from a mapped engine error.
fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Maps a JSON extraction failure onto a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

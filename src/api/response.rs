//! Response types for the labor engine API.
//!
//! This module defines the success payloads for every endpoint plus the
//! error response structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::PayrollTotals;
use crate::error::EngineError;
use crate::models::{BillingPeriod, DailyReport, MAX_WORKERS_PER_REPORT};

/// Response body for the `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the service is up.
    pub status: String,
    /// The crate version serving the request.
    pub version: String,
    /// Correlation ID for request tracking.
    pub correlation_id: Uuid,
}

/// Response body for the `/split` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitResponse {
    /// Regular hours before the cutoff, capped at the daily limit.
    pub regular_hours: Decimal,
    /// Overtime hours past the cutoff or above the cap.
    pub overtime_hours: Decimal,
    /// Correlation ID for request tracking.
    pub correlation_id: Uuid,
}

/// Response body for the `/reports` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportCreatedResponse {
    /// The stored report with its derived per-worker split.
    pub report: DailyReport,
    /// Regular hours across the whole crew.
    pub crew_regular_hours: Decimal,
    /// Overtime hours across the whole crew.
    pub crew_overtime_hours: Decimal,
    /// Total crew hours, regular plus overtime.
    pub crew_total_hours: Decimal,
    /// Correlation ID for request tracking.
    pub correlation_id: Uuid,
}

/// One priced row in a payroll calculation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRowResponse {
    /// Roster id of the employee.
    pub employee_id: String,
    /// Display name printed on the sheet.
    pub employee_name: String,
    /// Regular hours for the month.
    pub regular_hours: Decimal,
    /// Overtime hours for the month.
    pub overtime_hours: Decimal,
    /// Hourly wage in yen.
    pub hourly_wage: Decimal,
    /// Multiplier applied to overtime hours.
    pub overtime_multiplier: Decimal,
    /// Gross pay in whole yen.
    pub pay: Decimal,
}

/// Response body for the `/payroll/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollCalculateResponse {
    /// The payroll month.
    pub period: BillingPeriod,
    /// One priced row per entry, in request order.
    pub rows: Vec<PayrollRowResponse>,
    /// Sheet totals across all rows.
    pub totals: PayrollTotals,
    /// Correlation ID for request tracking.
    pub correlation_id: Uuid,
}

/// Response body for the `/payroll/export` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollExportResponse {
    /// Suggested file name for the download.
    pub file_name: String,
    /// The full CSV document, BOM included.
    pub content: String,
    /// Correlation ID for request tracking.
    pub correlation_id: Uuid,
}

/// One linked report priced within a billing summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSubtotalResponse {
    /// Date of the linked report.
    pub date: NaiveDate,
    /// Crew size on that day.
    pub workers: u32,
    /// Crew hours on that day, regular plus overtime.
    pub hours: Decimal,
    /// Subtotal in whole yen.
    pub amount: Decimal,
}

/// Response body for the `/projects/billing` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectBillingResponse {
    /// Id of the priced project.
    pub project_id: String,
    /// Total linked hours across all reports.
    pub total_hours: Decimal,
    /// Total billing amount in whole yen.
    pub total_billing: Decimal,
    /// Per-report subtotals, in linked order.
    pub subtotals: Vec<ReportSubtotalResponse>,
    /// Correlation ID for request tracking.
    pub correlation_id: Uuid,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an unparseable time-of-day error response.
    pub fn invalid_time(field: &str, value: &str) -> Self {
        Self::with_details(
            "VALIDATION_ERROR",
            format!("Invalid {}: '{}' is not a time of day", field, value),
            "Times are expected as 'HH:MM' or 'HH:MM:SS'",
        )
    }

    /// Creates an oversized crew error response.
    pub fn crew_too_large(count: usize) -> Self {
        Self::with_details(
            "VALIDATION_ERROR",
            format!(
                "A daily report lists at most {} workers, got {}",
                MAX_WORKERS_PER_REPORT, count
            ),
            "Split the crew across separate reports",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfiguration { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration validation error", message),
            },
            EngineError::InvalidInterval { start, end } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!(
                        "Invalid work interval: end time {} is not after start time {}",
                        end.format("%H:%M"),
                        start.format("%H:%M")
                    ),
                    "The work interval must end after it starts",
                ),
            },
            EngineError::InvalidBreak { break_hours } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid break duration: {} hours", break_hours),
                    "Break hours must be zero or positive",
                ),
            },
            EngineError::InvalidPeriod { value } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid billing period: '{}' is not in YYYY-MM format", value),
                    "Periods are expected as 'YYYY-MM', e.g. '2026-02'",
                ),
            },
        }
    }
}

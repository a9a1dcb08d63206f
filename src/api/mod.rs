//! HTTP API module for the labor engine.
//!
//! This module provides the REST API endpoints for splitting work
//! intervals, filing daily reports, calculating and exporting monthly
//! payroll, and summarizing project billing.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CreateReportRequest, PayrollEntryRequest, PayrollRequest, SplitRequest};
pub use response::{
    ApiError, HealthResponse, PayrollCalculateResponse, PayrollExportResponse, PayrollRowResponse,
    ProjectBillingResponse, ReportCreatedResponse, ReportSubtotalResponse, SplitResponse,
};
pub use state::AppState;

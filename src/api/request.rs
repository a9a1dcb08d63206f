//! Request types for the labor engine API.
//!
//! This module defines the JSON request structures for the split, report,
//! and payroll endpoints. Times of day arrive as strings in the form the
//! yard's paper forms use ("08:00"), so each request knows how to parse
//! itself into domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Department, PayrollRecord, WorkInterval, parse_time_of_day};

use super::response::ApiError;

/// Request body for the `/split` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRequest {
    /// Start of the attended window, e.g. "08:00".
    pub start_time: String,
    /// End of the attended window, e.g. "19:00".
    pub end_time: String,
    /// Unpaid break in hours, zero when omitted.
    #[serde(default)]
    pub break_hours: Decimal,
}

impl SplitRequest {
    /// Parses the request into a work interval.
    pub fn interval(&self) -> Result<WorkInterval, ApiError> {
        parse_interval(&self.start_time, &self.end_time, self.break_hours)
    }
}

/// Request body for the `/reports` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReportRequest {
    /// The day the work was done.
    pub date: NaiveDate,
    /// Name of the ship worked on.
    pub ship: String,
    /// Department that filed the report.
    pub department: Department,
    /// Crew member names, empty when nobody turned out.
    #[serde(default)]
    pub workers: Vec<String>,
    /// Start of the attended window, e.g. "08:00".
    pub start_time: String,
    /// End of the attended window, e.g. "19:00".
    pub end_time: String,
    /// Unpaid break in hours, zero when omitted.
    #[serde(default)]
    pub break_hours: Decimal,
}

impl CreateReportRequest {
    /// Parses the request times into a work interval.
    pub fn interval(&self) -> Result<WorkInterval, ApiError> {
        parse_interval(&self.start_time, &self.end_time, self.break_hours)
    }
}

/// One employee's monthly hours in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollEntryRequest {
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
}

/// Request body for the `/payroll/calculate` and `/payroll/export` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The payroll month as "YYYY-MM".
    pub period: String,
    /// One entry per employee, in sheet order.
    pub entries: Vec<PayrollEntryRequest>,
}

impl From<PayrollEntryRequest> for PayrollRecord {
    fn from(req: PayrollEntryRequest) -> Self {
        PayrollRecord {
            employee_id: req.employee_id,
            employee_name: req.employee_name,
            regular_hours: req.regular_hours,
            overtime_hours: req.overtime_hours,
            hourly_wage: req.hourly_wage,
            overtime_multiplier: req.overtime_multiplier,
        }
    }
}

fn parse_interval(
    start: &str,
    end: &str,
    break_hours: Decimal,
) -> Result<WorkInterval, ApiError> {
    let start_time =
        parse_time_of_day(start).ok_or_else(|| ApiError::invalid_time("start_time", start))?;
    let end_time = parse_time_of_day(end).ok_or_else(|| ApiError::invalid_time("end_time", end))?;

    Ok(WorkInterval {
        start_time,
        end_time,
        break_hours,
    })
}

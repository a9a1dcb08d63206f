//! Monthly payroll batch construction.
//!
//! This module folds one month of daily reports into a payroll batch,
//! crediting each listed worker with that report's per-worker split.

use rust_decimal::Decimal;

use crate::config::ShiftRules;
use crate::models::{BillingPeriod, DailyReport, Employee, PayrollBatch, PayrollRecord};

/// Builds the payroll batch for one month from the daily reports.
///
/// Walks the roster in order and credits each employee with the
/// per-worker hours of every report in the period that lists them by
/// name. Active employees always get a record, even with zero hours.
/// Inactive employees appear only when the month still holds hours for
/// them. Each record carries the employee's roster wage and the yard's
/// default overtime multiplier.
///
/// Reports outside the period are ignored, so callers can pass the full
/// report history unfiltered.
///
/// # Arguments
///
/// * `reports` - Daily reports, any range of dates
/// * `employees` - The roster, in payout order
/// * `period` - The payroll month
/// * `rules` - Shift rules supplying the overtime multiplier
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::build_monthly_batch;
/// use labor_engine::config::ShiftRules;
/// use labor_engine::models::{
///     BillingPeriod, DailyReport, Department, Employee, HourSplit, WorkInterval,
/// };
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employees = vec![Employee {
///     id: "emp-001".to_string(),
///     name: "山田 太郎".to_string(),
///     department: Department::Engine,
///     hourly_wage: Decimal::from(1800),
///     active: true,
/// }];
/// let reports = vec![DailyReport {
///     id: "rpt-001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 2, 24).unwrap(),
///     ship: "MHI-2398".to_string(),
///     department: Department::Engine,
///     workers: vec!["山田 太郎".to_string()],
///     interval: WorkInterval {
///         start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///         end_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
///         break_hours: Decimal::ONE,
///     },
///     split: HourSplit {
///         regular_hours: Decimal::from(8),
///         overtime_hours: Decimal::from(2),
///     },
/// }];
/// let period = BillingPeriod::new(2026, 2).unwrap();
///
/// let batch = build_monthly_batch(&reports, &employees, period, &ShiftRules::default());
///
/// assert_eq!(batch.records.len(), 1);
/// assert_eq!(batch.records[0].regular_hours, Decimal::from(8));
/// assert_eq!(batch.records[0].overtime_hours, Decimal::from(2));
/// assert_eq!(batch.records[0].overtime_multiplier, Decimal::from_str("1.25").unwrap());
/// ```
pub fn build_monthly_batch(
    reports: &[DailyReport],
    employees: &[Employee],
    period: BillingPeriod,
    rules: &ShiftRules,
) -> PayrollBatch {
    let mut records = Vec::new();

    for employee in employees {
        let mut regular_hours = Decimal::ZERO;
        let mut overtime_hours = Decimal::ZERO;

        for report in reports {
            if period.contains(report.date) && report.lists_worker(&employee.name) {
                regular_hours += report.split.regular_hours;
                overtime_hours += report.split.overtime_hours;
            }
        }

        // Inactive employees stay off the sheet once their hours run out.
        if !employee.active && regular_hours.is_zero() && overtime_hours.is_zero() {
            continue;
        }

        records.push(PayrollRecord {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            regular_hours,
            overtime_hours,
            hourly_wage: employee.hourly_wage,
            overtime_multiplier: rules.default_overtime_multiplier(),
        });
    }

    PayrollBatch { period, records }
}

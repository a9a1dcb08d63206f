//! Project billing amounts.
//!
//! This module prices a repair project's linked daily reports at the
//! project's contracted rate, for the invoice sent once reconciliation
//! is done.

use rust_decimal::Decimal;

use crate::models::{DailyReport, LinkedReport, Project};

use super::pay::round_to_yen;

/// Prices one linked report at the given hourly rate.
///
/// The subtotal is the report's crew hours, regular plus overtime, times
/// the rate, rounded half-up to whole yen.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::report_subtotal;
/// use labor_engine::models::LinkedReport;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let report = LinkedReport {
///     date: NaiveDate::from_ymd_opt(2026, 2, 24).unwrap(),
///     workers: 6,
///     regular_hours: Decimal::from(48),
///     overtime_hours: Decimal::from(12),
/// };
///
/// assert_eq!(report_subtotal(&report, Decimal::from(3000)), Decimal::from(180000));
/// ```
pub fn report_subtotal(report: &LinkedReport, unit_price: Decimal) -> Decimal {
    round_to_yen((report.regular_hours + report.overtime_hours) * unit_price)
}

/// Calculates the total billing amount for a project.
///
/// The amount is the project's total linked hours times its unit price,
/// rounded half-up to whole yen. A project with no linked reports bills
/// zero.
///
/// # Arguments
///
/// * `project` - The project with its linked reports and unit price
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::project_billing;
/// use labor_engine::models::{LinkedReport, Project, ProjectStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let project = Project {
///     id: "prj-001".to_string(),
///     ship: "MHI-2398".to_string(),
///     client: "三菱重工 下関".to_string(),
///     status: ProjectStatus::Reconciling,
///     notice_received: true,
///     unit_price: Decimal::from(3000),
///     linked_reports: vec![
///         LinkedReport {
///             date: NaiveDate::from_ymd_opt(2026, 2, 24).unwrap(),
///             workers: 6,
///             regular_hours: Decimal::from(48),
///             overtime_hours: Decimal::from(12),
///         },
///         LinkedReport {
///             date: NaiveDate::from_ymd_opt(2026, 2, 25).unwrap(),
///             workers: 4,
///             regular_hours: Decimal::from(32),
///             overtime_hours: Decimal::from(4),
///         },
///     ],
///     created_at: NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
/// };
///
/// // 96 hours at 3000 yen
/// assert_eq!(project_billing(&project), Decimal::from(288000));
/// ```
pub fn project_billing(project: &Project) -> Decimal {
    round_to_yen(project.total_hours() * project.unit_price)
}

/// Returns a copy of the project with a daily report linked to it.
///
/// The report is condensed to its date, crew size, and crew hour totals.
/// Nothing else on the project changes; advancing the status stays a
/// separate, deliberate step.
///
/// # Arguments
///
/// * `project` - The project to link into
/// * `report` - The daily report to attach
pub fn link_report(project: &Project, report: &DailyReport) -> Project {
    let mut linked = project.clone();
    linked.linked_reports.push(LinkedReport {
        date: report.date,
        workers: report.crew_size() as u32,
        regular_hours: report.crew_regular_hours(),
        overtime_hours: report.crew_overtime_hours(),
    });
    linked
}

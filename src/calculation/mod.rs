//! Calculation logic for the labor engine.
//!
//! This module contains all the calculation functions for turning daily
//! reports into money: splitting work intervals into regular and overtime
//! hours around the cutoff, pricing payroll records, aggregating batch
//! totals, building the monthly payroll batch, wage adjustments, project
//! billing amounts, and dashboard statistics.

mod aggregate;
mod billing;
mod monthly_payroll;
mod pay;
mod stats;
mod time_split;
mod wage_update;

pub use aggregate::{PayrollTotals, aggregate};
pub use billing::{link_report, project_billing, report_subtotal};
pub use monthly_payroll::build_monthly_batch;
pub use pay::pay_for;
pub use stats::{DashboardStats, dashboard_stats, group_by_status};
pub use time_split::split_hours;
pub use wage_update::update_wage;

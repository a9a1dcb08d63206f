//! Core data models for the labor engine.
//!
//! This module contains all the domain models used throughout the engine.

mod billing_period;
mod daily_report;
mod employee;
mod hour_split;
mod master;
mod payroll;
mod project;
mod ship;
mod work_interval;

pub use billing_period::BillingPeriod;
pub use daily_report::{DailyReport, MAX_WORKERS_PER_REPORT};
pub use employee::{Department, Employee};
pub use hour_split::HourSplit;
pub use master::{active_employee_names, active_ship_names, update_employee, update_ship};
pub use payroll::{PayrollBatch, PayrollRecord};
pub use project::{LinkedReport, Project, ProjectStatus};
pub use ship::{Ship, ShipKind};
pub use work_interval::{WorkInterval, parse_time_of_day};

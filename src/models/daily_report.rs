//! Daily report model.
//!
//! This module defines the [`DailyReport`] struct, the record a foreman
//! files for one crew's work on one ship on one day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Department, HourSplit, WorkInterval};

/// The largest crew one report may list.
pub const MAX_WORKERS_PER_REPORT: usize = 5;

/// Represents one crew's work on one ship on one day.
///
/// The whole crew shares a single time window, so the stored split is per
/// worker. Crew totals are derived by multiplying the split by the number
/// of listed workers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    /// Unique identifier for the report.
    pub id: String,
    /// The day the work was performed.
    pub date: NaiveDate,
    /// The name of the ship the crew worked on.
    pub ship: String,
    /// The department the crew belongs to.
    pub department: Department,
    /// Names of the workers on the crew.
    pub workers: Vec<String>,
    /// The shared clock-in window and break.
    pub interval: WorkInterval,
    /// Per-worker regular and overtime hours for the day.
    pub split: HourSplit,
}

impl DailyReport {
    /// The number of workers on the crew.
    pub fn crew_size(&self) -> usize {
        self.workers.len()
    }

    /// Regular hours summed over the whole crew.
    pub fn crew_regular_hours(&self) -> Decimal {
        self.split.regular_hours * Decimal::from(self.workers.len())
    }

    /// Overtime hours summed over the whole crew.
    pub fn crew_overtime_hours(&self) -> Decimal {
        self.split.overtime_hours * Decimal::from(self.workers.len())
    }

    /// Combined crew hours across both categories.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_engine::models::{DailyReport, Department, HourSplit, WorkInterval};
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let report = DailyReport {
    ///     id: "rpt_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
    ///     ship: "第一志成丸".to_string(),
    ///     department: Department::Engine,
    ///     workers: vec!["山田 太郎".to_string(), "佐藤 一郎".to_string()],
    ///     interval: WorkInterval {
    ///         start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///         end_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
    ///         break_hours: Decimal::ONE,
    ///     },
    ///     split: HourSplit {
    ///         regular_hours: Decimal::from(8),
    ///         overtime_hours: Decimal::from(2),
    ///     },
    /// };
    /// assert_eq!(report.crew_total_hours(), Decimal::from(20));
    /// ```
    pub fn crew_total_hours(&self) -> Decimal {
        self.crew_regular_hours() + self.crew_overtime_hours()
    }

    /// Checks whether the named worker appears on this report's crew.
    pub fn lists_worker(&self, name: &str) -> bool {
        self.workers.iter().any(|w| w == name)
    }
}

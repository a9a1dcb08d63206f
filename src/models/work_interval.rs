//! Work interval model.
//!
//! This module defines the [`WorkInterval`] struct representing a single
//! day's clock-in window with its unpaid break.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents one worker's attended window on a single day.
///
/// Times carry no date component because every report covers exactly one
/// calendar day and intervals never cross midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// Clock-in time.
    pub start_time: NaiveTime,
    /// Clock-out time.
    pub end_time: NaiveTime,
    /// Unpaid break duration in hours.
    pub break_hours: Decimal,
}

impl WorkInterval {
    /// Checks that the interval is well-formed.
    ///
    /// The end time must be strictly after the start time and the break
    /// duration must not be negative. A break longer than the interval
    /// itself is accepted; downstream splitting treats it as zero worked
    /// hours.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_time <= self.start_time {
            return Err(EngineError::InvalidInterval {
                start: self.start_time,
                end: self.end_time,
            });
        }
        if self.break_hours < Decimal::ZERO {
            return Err(EngineError::InvalidBreak {
                break_hours: self.break_hours,
            });
        }
        Ok(())
    }

    /// Returns the span between clock-in and clock-out in minutes.
    pub fn total_minutes(&self) -> Decimal {
        Decimal::from(
            self.end_time
                .signed_duration_since(self.start_time)
                .num_minutes(),
        )
    }

    /// Returns the break duration in minutes.
    pub fn break_minutes(&self) -> Decimal {
        self.break_hours * Decimal::from(60)
    }

    /// Calculates the attended hours net of the break.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_engine::models::WorkInterval;
    /// use chrono::NaiveTime;
    /// use rust_decimal::Decimal;
    ///
    /// let interval = WorkInterval {
    ///     start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
    ///     break_hours: Decimal::ONE,
    /// };
    /// assert_eq!(interval.worked_hours(), Decimal::from(10));
    /// ```
    ///
    /// The result is negative when the recorded break exceeds the interval.
    pub fn worked_hours(&self) -> Decimal {
        (self.total_minutes() - self.break_minutes()) / Decimal::from(60)
    }
}

/// Parses a wall-clock time in `HH:MM` form, also accepting `HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use labor_engine::models::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_time_of_day("08:30"),
///     Some(NaiveTime::from_hms_opt(8, 30, 0).unwrap())
/// );
/// assert_eq!(parse_time_of_day("25:00"), None);
/// ```
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

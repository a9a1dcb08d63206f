//! Hour split model.
//!
//! This module defines the [`HourSplit`] struct, the result of dividing a
//! work interval into regular and overtime portions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The regular and overtime portions of one worker's day.
///
/// Both fields are rounded to one decimal place and are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSplit {
    /// Hours worked before the regular cutoff, capped at the daily limit.
    pub regular_hours: Decimal,
    /// Hours worked beyond the regular portion.
    pub overtime_hours: Decimal,
}

impl HourSplit {
    /// An empty split with zero hours in both categories.
    pub const ZERO: HourSplit = HourSplit {
        regular_hours: Decimal::ZERO,
        overtime_hours: Decimal::ZERO,
    };

    /// Returns the combined regular and overtime hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_engine::models::HourSplit;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let split = HourSplit {
    ///     regular_hours: Decimal::from(8),
    ///     overtime_hours: Decimal::from_str("1.5").unwrap(),
    /// };
    /// assert_eq!(split.total(), Decimal::from_str("9.5").unwrap());
    /// ```
    pub fn total(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}

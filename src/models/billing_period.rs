//! Billing period model.
//!
//! This module defines the [`BillingPeriod`] type, a calendar month used to
//! scope payroll batches and name exported artifacts.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month in the form `YYYY-MM`.
///
/// Periods order chronologically and serialize as their canonical string
/// form, so they can be used directly as map keys and in file names.
///
/// # Example
///
/// ```
/// use labor_engine::models::BillingPeriod;
///
/// let period: BillingPeriod = "2026-02".parse().unwrap();
/// assert_eq!(period.year(), 2026);
/// assert_eq!(period.month(), 2);
/// assert_eq!(period.to_string(), "2026-02");
/// assert_eq!(period.label(), "2026年02月");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct BillingPeriod {
    year: i32,
    month: u32,
}

impl BillingPeriod {
    /// Creates a billing period from a year and a month number.
    ///
    /// Returns an error when the month is outside 1 through 12.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod {
                value: format!("{:04}-{:02}", year, month),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the period containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar year of this period.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number of this period, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Checks whether a date falls inside this period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Returns the month immediately before this one.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns the most recent `count` periods, newest first, starting with
    /// the period containing `today`.
    pub fn recent(today: NaiveDate, count: usize) -> Vec<Self> {
        let mut periods = Vec::with_capacity(count);
        let mut current = Self::from_date(today);
        for _ in 0..count {
            periods.push(current);
            current = current.previous();
        }
        periods
    }

    /// Returns the display label in the form `YYYY年MM月`.
    pub fn label(&self) -> String {
        format!("{:04}年{:02}月", self.year, self.month)
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BillingPeriod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidPeriod {
            value: s.to_string(),
        };
        let (year_part, month_part) = s.split_once('-').ok_or_else(invalid)?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for BillingPeriod {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BillingPeriod> for String {
    fn from(period: BillingPeriod) -> Self {
        period.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// BP-001: Parse a canonical period string.
    #[test]
    fn test_parse_canonical_string() {
        let period: BillingPeriod = "2026-02".parse().unwrap();
        assert_eq!(period.year(), 2026);
        assert_eq!(period.month(), 2);
    }

    /// BP-002: Reject a month outside the calendar range.
    #[test]
    fn test_parse_rejects_month_thirteen() {
        let result: Result<BillingPeriod, _> = "2026-13".parse();
        assert!(matches!(
            result.unwrap_err(),
            EngineError::InvalidPeriod { .. }
        ));
    }

    /// BP-003: Reject malformed separators and widths.
    #[test]
    fn test_parse_rejects_malformed_strings() {
        for input in ["2026/02", "2026-2", "26-02", "202602", "2026-02-15", ""] {
            let result: Result<BillingPeriod, _> = input.parse();
            assert!(result.is_err(), "expected '{}' to be rejected", input);
        }
    }

    /// BP-004: new() rejects month zero.
    #[test]
    fn test_new_rejects_month_zero() {
        assert!(BillingPeriod::new(2026, 0).is_err());
    }

    #[test]
    fn test_display_zero_pads_month() {
        let period = BillingPeriod::new(2026, 2).unwrap();
        assert_eq!(period.to_string(), "2026-02");
    }

    #[test]
    fn test_label_uses_japanese_calendar_markers() {
        let period = BillingPeriod::new(2026, 2).unwrap();
        assert_eq!(period.label(), "2026年02月");
    }

    #[test]
    fn test_from_date_takes_year_and_month() {
        let period = BillingPeriod::from_date(make_date(2026, 2, 15));
        assert_eq!(period, BillingPeriod::new(2026, 2).unwrap());
    }

    #[test]
    fn test_contains_matches_only_same_month() {
        let period = BillingPeriod::new(2026, 2).unwrap();
        assert!(period.contains(make_date(2026, 2, 1)));
        assert!(period.contains(make_date(2026, 2, 28)));
        assert!(!period.contains(make_date(2026, 1, 31)));
        assert!(!period.contains(make_date(2026, 3, 1)));
        assert!(!period.contains(make_date(2025, 2, 15)));
    }

    #[test]
    fn test_previous_crosses_year_boundary() {
        let january = BillingPeriod::new(2026, 1).unwrap();
        assert_eq!(january.previous(), BillingPeriod::new(2025, 12).unwrap());
    }

    #[test]
    fn test_recent_returns_newest_first() {
        let periods = BillingPeriod::recent(make_date(2026, 2, 15), 3);
        assert_eq!(
            periods,
            vec![
                BillingPeriod::new(2026, 2).unwrap(),
                BillingPeriod::new(2026, 1).unwrap(),
                BillingPeriod::new(2025, 12).unwrap(),
            ]
        );
    }

    #[test]
    fn test_recent_twelve_months_spans_the_year() {
        let periods = BillingPeriod::recent(make_date(2026, 2, 1), 12);
        assert_eq!(periods.len(), 12);
        assert_eq!(periods[0], BillingPeriod::new(2026, 2).unwrap());
        assert_eq!(periods[11], BillingPeriod::new(2025, 3).unwrap());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let earlier = BillingPeriod::new(2025, 12).unwrap();
        let later = BillingPeriod::new(2026, 1).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_serialize_as_canonical_string() {
        let period = BillingPeriod::new(2026, 2).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"2026-02\"");
    }

    #[test]
    fn test_deserialize_from_canonical_string() {
        let period: BillingPeriod = serde_json::from_str("\"2026-02\"").unwrap();
        assert_eq!(period, BillingPeriod::new(2026, 2).unwrap());
    }

    #[test]
    fn test_deserialize_rejects_malformed_string() {
        let result: Result<BillingPeriod, _> = serde_json::from_str("\"February 2026\"");
        assert!(result.is_err());
    }
}

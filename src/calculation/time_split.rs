//! Work interval splitting.
//!
//! This module divides one worker's attended day into regular and overtime
//! hours around the yard's evening cutoff. It is the calculation behind
//! every daily report's stored hour split.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::ShiftRules;
use crate::error::EngineResult;
use crate::models::{HourSplit, WorkInterval};

/// Splits a work interval into regular and overtime hours.
///
/// Regular hours are the worked minutes before the configured cutoff, net
/// of the break and capped at the daily limit. Overtime absorbs every
/// remaining worked hour: time past the cutoff as well as pre-cutoff time
/// above the cap. The break is always deducted from the regular window
/// first, wherever it actually fell during the day.
///
/// Both results are rounded to one decimal place, half-up.
///
/// # Arguments
///
/// * `interval` - The attended window with its unpaid break
/// * `rules` - The yard's shift rules (cutoff and daily cap)
///
/// # Errors
///
/// Returns `InvalidInterval` when the interval ends at or before its
/// start, and `InvalidBreak` when the break is negative. A break longer
/// than the interval is not an error; it yields a zero split.
///
/// # Examples
///
/// A standard day running past the cutoff:
///
/// ```
/// use labor_engine::calculation::split_hours;
/// use labor_engine::config::ShiftRules;
/// use labor_engine::models::WorkInterval;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let interval = WorkInterval {
///     start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
///     break_hours: Decimal::ONE,
/// };
/// let split = split_hours(&interval, &ShiftRules::default()).unwrap();
///
/// assert_eq!(split.regular_hours, Decimal::from_str("8.0").unwrap());
/// assert_eq!(split.overtime_hours, Decimal::from_str("2.0").unwrap());
/// ```
///
/// A shift that starts after the cutoff is overtime in full:
///
/// ```
/// use labor_engine::calculation::split_hours;
/// use labor_engine::config::ShiftRules;
/// use labor_engine::models::WorkInterval;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let interval = WorkInterval {
///     start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
///     break_hours: Decimal::ZERO,
/// };
/// let split = split_hours(&interval, &ShiftRules::default()).unwrap();
///
/// assert_eq!(split.regular_hours, Decimal::ZERO);
/// assert_eq!(split.overtime_hours, Decimal::from(2));
/// ```
pub fn split_hours(interval: &WorkInterval, rules: &ShiftRules) -> EngineResult<HourSplit> {
    interval.validate()?;

    let worked_minutes = interval.total_minutes() - interval.break_minutes();

    // Worked minutes inside the regular window, break deducted first.
    let window_end = interval.end_time.min(rules.regular_cutoff());
    let window_minutes = Decimal::from(
        window_end
            .signed_duration_since(interval.start_time)
            .num_minutes(),
    ) - interval.break_minutes();

    let minutes_per_hour = Decimal::from(60);
    let regular_hours =
        (window_minutes / minutes_per_hour).clamp(Decimal::ZERO, rules.daily_regular_cap());
    let overtime_hours = (worked_minutes / minutes_per_hour - regular_hours).max(Decimal::ZERO);

    Ok(HourSplit {
        regular_hours: round_to_tenth(regular_hours),
        overtime_hours: round_to_tenth(overtime_hours),
    })
}

/// Rounds hours to one decimal place, half-up.
fn round_to_tenth(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

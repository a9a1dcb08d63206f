//! Gross pay calculation.
//!
//! This module prices one employee's monthly hours: regular hours at the
//! base wage, overtime hours at the base wage times the overtime
//! multiplier, rounded to whole yen.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::PayrollRecord;

/// Calculates the gross monthly pay for one payroll record.
///
/// Pay is `regular_hours * hourly_wage + overtime_hours * hourly_wage *
/// overtime_multiplier`, rounded half-up to whole yen. Records with zero
/// hours price to zero.
///
/// # Arguments
///
/// * `record` - The employee's monthly hours, wage, and multiplier
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::pay_for;
/// use labor_engine::models::PayrollRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = PayrollRecord {
///     employee_id: "emp-001".to_string(),
///     employee_name: "山田 太郎".to_string(),
///     regular_hours: Decimal::from(168),
///     overtime_hours: Decimal::from(24),
///     hourly_wage: Decimal::from(1800),
///     overtime_multiplier: Decimal::from_str("1.25").unwrap(),
/// };
///
/// // 168 * 1800 + 24 * 1800 * 1.25 = 302400 + 54000
/// assert_eq!(pay_for(&record), Decimal::from(356400));
/// ```
///
/// Fractional yen round half-up:
///
/// ```
/// use labor_engine::calculation::pay_for;
/// use labor_engine::models::PayrollRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = PayrollRecord {
///     employee_id: "emp-002".to_string(),
///     employee_name: "佐藤 一郎".to_string(),
///     regular_hours: Decimal::from_str("0.5").unwrap(),
///     overtime_hours: Decimal::from_str("0.1").unwrap(),
///     hourly_wage: Decimal::from(1775),
///     overtime_multiplier: Decimal::from_str("1.25").unwrap(),
/// };
///
/// // 887.5 + 221.875 = 1109.375
/// assert_eq!(pay_for(&record), Decimal::from(1109));
/// ```
pub fn pay_for(record: &PayrollRecord) -> Decimal {
    let regular_pay = record.regular_hours * record.hourly_wage;
    let overtime_pay = record.overtime_hours * record.hourly_wage * record.overtime_multiplier;

    round_to_yen(regular_pay + overtime_pay)
}

/// Rounds an amount to whole yen, half-up.
pub(crate) fn round_to_yen(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

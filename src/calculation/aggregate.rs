//! Payroll batch aggregation.
//!
//! This module totals a batch of payroll records into the figures shown
//! at the bottom of the monthly payroll sheet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PayrollRecord;

use super::pay::pay_for;

/// Totals across one payroll batch.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::PayrollTotals;
/// use rust_decimal::Decimal;
///
/// let totals = PayrollTotals {
///     total_regular_hours: Decimal::from(328),
///     total_overtime_hours: Decimal::from(40),
///     grand_total: Decimal::from(680400),
/// };
///
/// assert_eq!(totals.total_regular_hours + totals.total_overtime_hours, Decimal::from(368));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of regular hours across all records.
    pub total_regular_hours: Decimal,
    /// Sum of overtime hours across all records.
    pub total_overtime_hours: Decimal,
    /// Sum of every record's gross pay, each already rounded to whole yen.
    pub grand_total: Decimal,
}

/// Aggregates a batch of payroll records into sheet totals.
///
/// Hours are summed as-is. The grand total is the sum of each record's
/// rounded gross pay, so it always matches the sum of the amounts printed
/// on the sheet. An empty batch aggregates to all zeros.
///
/// # Arguments
///
/// * `records` - The batch, one record per employee
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::aggregate;
/// use labor_engine::models::PayrollRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let records = vec![
///     PayrollRecord {
///         employee_id: "emp-001".to_string(),
///         employee_name: "山田 太郎".to_string(),
///         regular_hours: Decimal::from(168),
///         overtime_hours: Decimal::from(24),
///         hourly_wage: Decimal::from(1800),
///         overtime_multiplier: Decimal::from_str("1.25").unwrap(),
///     },
///     PayrollRecord {
///         employee_id: "emp-002".to_string(),
///         employee_name: "佐藤 一郎".to_string(),
///         regular_hours: Decimal::from(160),
///         overtime_hours: Decimal::from(16),
///         hourly_wage: Decimal::from(1600),
///         overtime_multiplier: Decimal::from_str("1.25").unwrap(),
///     },
/// ];
///
/// let totals = aggregate(&records);
///
/// assert_eq!(totals.total_regular_hours, Decimal::from(328));
/// assert_eq!(totals.total_overtime_hours, Decimal::from(40));
/// // 356400 + 288000
/// assert_eq!(totals.grand_total, Decimal::from(644400));
/// ```
pub fn aggregate(records: &[PayrollRecord]) -> PayrollTotals {
    let mut totals = PayrollTotals {
        total_regular_hours: Decimal::ZERO,
        total_overtime_hours: Decimal::ZERO,
        grand_total: Decimal::ZERO,
    };

    for record in records {
        totals.total_regular_hours += record.regular_hours;
        totals.total_overtime_hours += record.overtime_hours;
        totals.grand_total += pay_for(record);
    }

    totals
}

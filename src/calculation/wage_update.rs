//! Wage adjustments within a payroll batch.

use rust_decimal::Decimal;

use crate::models::PayrollRecord;

/// Returns a copy of the batch with one employee's hourly wage replaced.
///
/// The employee's hours and multiplier are untouched; only the wage on
/// the matching record changes. An unknown id returns the batch
/// unchanged.
///
/// # Arguments
///
/// * `records` - The batch to adjust
/// * `employee_id` - Id of the record to re-price
/// * `new_wage` - The replacement hourly wage in yen
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::{pay_for, update_wage};
/// use labor_engine::models::PayrollRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let records = vec![PayrollRecord {
///     employee_id: "emp-001".to_string(),
///     employee_name: "山田 太郎".to_string(),
///     regular_hours: Decimal::from(168),
///     overtime_hours: Decimal::from(24),
///     hourly_wage: Decimal::from(1800),
///     overtime_multiplier: Decimal::from_str("1.25").unwrap(),
/// }];
///
/// let updated = update_wage(&records, "emp-001", Decimal::from(1900));
///
/// assert_eq!(updated[0].hourly_wage, Decimal::from(1900));
/// // 168 * 1900 + 24 * 1900 * 1.25 = 319200 + 57000
/// assert_eq!(pay_for(&updated[0]), Decimal::from(376200));
/// ```
pub fn update_wage(
    records: &[PayrollRecord],
    employee_id: &str,
    new_wage: Decimal,
) -> Vec<PayrollRecord> {
    records
        .iter()
        .map(|record| {
            if record.employee_id == employee_id {
                PayrollRecord {
                    hourly_wage: new_wage,
                    ..record.clone()
                }
            } else {
                record.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::pay_for;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_record(id: &str, name: &str, hourly_wage: &str) -> PayrollRecord {
        PayrollRecord {
            employee_id: id.to_string(),
            employee_name: name.to_string(),
            regular_hours: dec("160"),
            overtime_hours: dec("10"),
            hourly_wage: dec(hourly_wage),
            overtime_multiplier: dec("1.25"),
        }
    }

    // ==========================================================================
    // WU-001: only the matching record's wage changes
    // ==========================================================================
    #[test]
    fn test_wu_001_replaces_wage_on_matching_record() {
        let records = vec![
            make_record("emp-001", "山田 太郎", "1800"),
            make_record("emp-002", "佐藤 一郎", "1600"),
        ];

        let updated = update_wage(&records, "emp-002", dec("1650"));
        assert_eq!(updated[0].hourly_wage, dec("1800"));
        assert_eq!(updated[1].hourly_wage, dec("1650"));
    }

    // ==========================================================================
    // WU-002: hours and multiplier are untouched
    // ==========================================================================
    #[test]
    fn test_wu_002_keeps_hours_and_multiplier() {
        let records = vec![make_record("emp-001", "山田 太郎", "1800")];

        let updated = update_wage(&records, "emp-001", dec("1900"));
        assert_eq!(updated[0].regular_hours, dec("160"));
        assert_eq!(updated[0].overtime_hours, dec("10"));
        assert_eq!(updated[0].overtime_multiplier, dec("1.25"));
    }

    // ==========================================================================
    // WU-003: unknown id leaves the batch unchanged
    // ==========================================================================
    #[test]
    fn test_wu_003_unknown_id_is_a_no_op() {
        let records = vec![make_record("emp-001", "山田 太郎", "1800")];

        let updated = update_wage(&records, "emp-099", dec("2500"));
        assert_eq!(updated, records);
    }

    // ==========================================================================
    // WU-004: the original batch is not mutated
    // ==========================================================================
    #[test]
    fn test_wu_004_original_batch_is_untouched() {
        let records = vec![make_record("emp-001", "山田 太郎", "1800")];

        let _updated = update_wage(&records, "emp-001", dec("1900"));
        assert_eq!(records[0].hourly_wage, dec("1800"));
    }

    #[test]
    fn test_update_wage_reprices_pay() {
        let records = vec![make_record("emp-001", "山田 太郎", "1800")];

        let updated = update_wage(&records, "emp-001", dec("1900"));
        // 160 * 1900 + 10 * 1900 * 1.25 = 304000 + 23750
        assert_eq!(pay_for(&updated[0]), dec("327750"));
    }
}

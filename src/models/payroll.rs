//! Payroll record and batch models.
//!
//! This module contains the [`PayrollRecord`] and [`PayrollBatch`] types
//! that carry one month of per-employee hours and wage terms into the pay
//! calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BillingPeriod;

/// One employee's hours and wage terms for a billing period.
///
/// # Example
///
/// ```
/// use labor_engine::models::PayrollRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = PayrollRecord {
///     employee_id: "emp_001".to_string(),
///     employee_name: "山田 太郎".to_string(),
///     regular_hours: Decimal::from(168),
///     overtime_hours: Decimal::from(24),
///     hourly_wage: Decimal::from(1800),
///     overtime_multiplier: Decimal::from_str("1.25").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Identifier of the employee on the master roster.
    pub employee_id: String,
    /// The employee's full name, used on the exported statement.
    pub employee_name: String,
    /// Regular hours accumulated over the period.
    pub regular_hours: Decimal,
    /// Overtime hours accumulated over the period.
    pub overtime_hours: Decimal,
    /// The employee's hourly wage in yen.
    pub hourly_wage: Decimal,
    /// The multiplier applied to the wage for overtime hours.
    pub overtime_multiplier: Decimal,
}

/// A full month of payroll records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBatch {
    /// The billing period the records cover.
    pub period: BillingPeriod,
    /// One record per employee, in roster order.
    pub records: Vec<PayrollRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn create_test_record() -> PayrollRecord {
        PayrollRecord {
            employee_id: "emp_001".to_string(),
            employee_name: "山田 太郎".to_string(),
            regular_hours: Decimal::from(168),
            overtime_hours: Decimal::from(24),
            hourly_wage: Decimal::from(1800),
            overtime_multiplier: Decimal::from_str("1.25").unwrap(),
        }
    }

    #[test]
    fn test_deserialize_payroll_record() {
        let json = r#"{
            "employee_id": "emp_003",
            "employee_name": "鈴木 健二",
            "regular_hours": "168",
            "overtime_hours": "32",
            "hourly_wage": "2000",
            "overtime_multiplier": "1.25"
        }"#;

        let record: PayrollRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_name, "鈴木 健二");
        assert_eq!(record.regular_hours, Decimal::from(168));
        assert_eq!(record.overtime_hours, Decimal::from(32));
        assert_eq!(record.hourly_wage, Decimal::from(2000));
        assert_eq!(
            record.overtime_multiplier,
            Decimal::from_str("1.25").unwrap()
        );
    }

    #[test]
    fn test_serialize_record_round_trip() {
        let record = create_test_record();
        let json = serde_json::to_string(&record).unwrap();

        let deserialized: PayrollRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_deserialize_batch() {
        let json = r#"{
            "period": "2026-02",
            "records": [
                {
                    "employee_id": "emp_001",
                    "employee_name": "山田 太郎",
                    "regular_hours": "168",
                    "overtime_hours": "24",
                    "hourly_wage": "1800",
                    "overtime_multiplier": "1.25"
                }
            ]
        }"#;

        let batch: PayrollBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.period, BillingPeriod::new(2026, 2).unwrap());
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].employee_name, "山田 太郎");
    }

    #[test]
    fn test_serialize_batch_round_trip() {
        let batch = PayrollBatch {
            period: BillingPeriod::new(2026, 2).unwrap(),
            records: vec![create_test_record()],
        };
        let json = serde_json::to_string(&batch).unwrap();
        assert!(json.contains("\"period\":\"2026-02\""));

        let deserialized: PayrollBatch = serde_json::from_str(&json).unwrap();
        assert_eq!(batch, deserialized);
    }
}

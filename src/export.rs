//! CSV export of the monthly payroll sheet.
//!
//! The payroll office opens these files in Excel, so the document is
//! UTF-8 with a byte order mark and every numeric column is written
//! without trailing zeros.

use crate::calculation::pay_for;
use crate::models::{BillingPeriod, PayrollBatch, PayrollRecord};

/// Byte order mark Excel needs to recognize UTF-8 CSVs with Japanese text.
const UTF8_BOM: char = '\u{feff}';

/// Header row of the payroll sheet.
pub const CSV_HEADER: &str = "従業員名,通常時間(h),残業時間(h),時給(円),残業倍率,支給額(円)";

/// Renders a payroll batch as the monthly payroll CSV.
///
/// One row per record, in batch order, after the header: name, regular
/// hours, overtime hours, wage, multiplier, gross pay. Numbers are
/// normalized (`8`, not `8.0`; `1.5` stays `1.5`) and pay is whole yen
/// with no separators. Lines end with `\n` and the document has no
/// trailing newline.
///
/// # Examples
///
/// ```
/// use labor_engine::export::payroll_csv;
/// use labor_engine::models::{BillingPeriod, PayrollBatch, PayrollRecord};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let batch = PayrollBatch {
///     period: BillingPeriod::new(2026, 2).unwrap(),
///     records: vec![PayrollRecord {
///         employee_id: "emp-001".to_string(),
///         employee_name: "山田 太郎".to_string(),
///         regular_hours: Decimal::from(168),
///         overtime_hours: Decimal::from(24),
///         hourly_wage: Decimal::from(1800),
///         overtime_multiplier: Decimal::from_str("1.25").unwrap(),
///     }],
/// };
///
/// let csv = payroll_csv(&batch);
/// assert!(csv.ends_with("山田 太郎,168,24,1800,1.25,356400"));
/// ```
pub fn payroll_csv(batch: &PayrollBatch) -> String {
    let mut lines = Vec::with_capacity(batch.records.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for record in &batch.records {
        lines.push(record_line(record));
    }

    format!("{}{}", UTF8_BOM, lines.join("\n"))
}

/// Renders one record as a CSV row.
fn record_line(record: &PayrollRecord) -> String {
    format!(
        "{},{},{},{},{},{}",
        record.employee_name,
        record.regular_hours.normalize(),
        record.overtime_hours.normalize(),
        record.hourly_wage.normalize(),
        record.overtime_multiplier.normalize(),
        pay_for(record).normalize()
    )
}

/// File name for a period's payroll export, e.g. `給与計算_2026-02.csv`.
pub fn export_file_name(period: BillingPeriod) -> String {
    format!("給与計算_{}.csv", period)
}

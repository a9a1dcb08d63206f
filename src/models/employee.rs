//! Employee model and related types.
//!
//! This module defines the Employee struct and Department enum for the
//! workers on the yard's master roster.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The section of the yard an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    /// Engine department (機関部).
    #[serde(rename = "機関")]
    Engine,
    /// Deck department (甲板部).
    #[serde(rename = "甲板")]
    Deck,
}

/// Represents one worker on the master roster.
///
/// Inactive employees stay on the roster so historical reports naming them
/// keep resolving, but they are left out of new report entry and of the
/// monthly payroll unless they actually worked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name as it appears on reports.
    pub name: String,
    /// The department the employee works in.
    pub department: Department,
    /// The employee's hourly wage in yen.
    pub hourly_wage: Decimal,
    /// Whether the employee is currently on the active roster.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(active: bool) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "山田 太郎".to_string(),
            department: Department::Engine,
            hourly_wage: Decimal::from(1800),
            active,
        }
    }

    #[test]
    fn test_deserialize_active_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "山田 太郎",
            "department": "機関",
            "hourly_wage": "1800",
            "active": true
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.name, "山田 太郎");
        assert_eq!(employee.department, Department::Engine);
        assert_eq!(employee.hourly_wage, Decimal::from(1800));
        assert!(employee.active);
    }

    #[test]
    fn test_deserialize_deck_employee() {
        let json = r#"{
            "id": "emp_004",
            "name": "田中 正志",
            "department": "甲板",
            "hourly_wage": "1700",
            "active": true
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.department, Department::Deck);
        assert_eq!(employee.hourly_wage, Decimal::from(1700));
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee(true);
        let json = serde_json::to_string(&employee).unwrap();

        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_inactive_employee_round_trip() {
        let employee = create_test_employee(false);
        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"active\":false"));

        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert!(!deserialized.active);
    }

    #[test]
    fn test_department_serialization() {
        assert_eq!(
            serde_json::to_string(&Department::Engine).unwrap(),
            "\"機関\""
        );
        assert_eq!(serde_json::to_string(&Department::Deck).unwrap(), "\"甲板\"");
    }

    #[test]
    fn test_department_deserialization_rejects_unknown_label() {
        let result: Result<Department, _> = serde_json::from_str("\"総務\"");
        assert!(result.is_err());
    }
}

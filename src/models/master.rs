//! Master data maintenance helpers.
//!
//! Roster and fleet edits are copy-on-write: each update returns a new
//! collection and leaves the input untouched, so callers can keep the old
//! snapshot for comparison or undo.

use super::{Employee, Ship};

/// Returns a copy of the roster with the matching employee replaced.
///
/// Matching is by `id`. An unknown id is a silent no-op that returns an
/// equal collection.
pub fn update_employee(employees: &[Employee], updated: &Employee) -> Vec<Employee> {
    employees
        .iter()
        .map(|employee| {
            if employee.id == updated.id {
                updated.clone()
            } else {
                employee.clone()
            }
        })
        .collect()
}

/// Returns a copy of the fleet list with the matching ship replaced.
///
/// Matching is by `id`. An unknown id is a silent no-op that returns an
/// equal collection.
pub fn update_ship(ships: &[Ship], updated: &Ship) -> Vec<Ship> {
    ships
        .iter()
        .map(|ship| {
            if ship.id == updated.id {
                updated.clone()
            } else {
                ship.clone()
            }
        })
        .collect()
}

/// Names of the employees available for new report entry, roster order.
pub fn active_employee_names(employees: &[Employee]) -> Vec<String> {
    employees
        .iter()
        .filter(|e| e.active)
        .map(|e| e.name.clone())
        .collect()
}

/// Names of the ships available for new report entry, list order.
pub fn active_ship_names(ships: &[Ship]) -> Vec<String> {
    ships
        .iter()
        .filter(|s| s.active)
        .map(|s| s.name.clone())
        .collect()
}

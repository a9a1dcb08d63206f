//! Ship model and related types.
//!
//! This module defines the Ship struct and ShipKind enum for the vessels
//! that daily reports are filed against.

use serde::{Deserialize, Serialize};

/// Distinguishes the yard's own vessels from customer vessels under repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipKind {
    /// A work vessel owned and operated by the yard (作業船).
    #[serde(rename = "作業船")]
    WorkVessel,
    /// A customer vessel docked for repair (修繕対象).
    #[serde(rename = "修繕対象")]
    RepairTarget,
}

/// Represents one vessel on the master list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    /// Unique identifier for the ship.
    pub id: String,
    /// The ship's name as it appears on reports.
    pub name: String,
    /// Whether this is a yard vessel or a repair target.
    #[serde(rename = "type")]
    pub kind: ShipKind,
    /// The owning client, or the yard itself for work vessels.
    pub client: String,
    /// Whether the ship currently accepts new reports.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_ship(kind: ShipKind) -> Ship {
        Ship {
            id: "ship_001".to_string(),
            name: "第一志成丸".to_string(),
            kind,
            client: "自社".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_deserialize_work_vessel() {
        let json = r#"{
            "id": "ship_001",
            "name": "第一志成丸",
            "type": "作業船",
            "client": "自社",
            "active": true
        }"#;

        let ship: Ship = serde_json::from_str(json).unwrap();
        assert_eq!(ship.name, "第一志成丸");
        assert_eq!(ship.kind, ShipKind::WorkVessel);
        assert_eq!(ship.client, "自社");
    }

    #[test]
    fn test_deserialize_repair_target() {
        let json = r#"{
            "id": "ship_004",
            "name": "MHI-2398",
            "type": "修繕対象",
            "client": "三菱重工 下関",
            "active": true
        }"#;

        let ship: Ship = serde_json::from_str(json).unwrap();
        assert_eq!(ship.kind, ShipKind::RepairTarget);
        assert_eq!(ship.client, "三菱重工 下関");
    }

    #[test]
    fn test_serialize_ship_uses_type_key() {
        let ship = create_test_ship(ShipKind::WorkVessel);
        let json = serde_json::to_string(&ship).unwrap();
        assert!(json.contains("\"type\":\"作業船\""));
        assert!(!json.contains("\"kind\""));
    }

    #[test]
    fn test_serialize_ship_round_trip() {
        let ship = create_test_ship(ShipKind::RepairTarget);
        let json = serde_json::to_string(&ship).unwrap();

        let deserialized: Ship = serde_json::from_str(&json).unwrap();
        assert_eq!(ship, deserialized);
    }

    #[test]
    fn test_ship_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ShipKind::WorkVessel).unwrap(),
            "\"作業船\""
        );
        assert_eq!(
            serde_json::to_string(&ShipKind::RepairTarget).unwrap(),
            "\"修繕対象\""
        );
    }
}

//! Room model - a physical room on a floor

use serde::{Deserialize, Serialize};

use super::FloorId;

/// Server-assigned room identifier
pub type RoomId = i64;

/// Room category as reported by the room-data API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    #[serde(rename = "class")]
    Classroom,
    #[serde(rename = "lab")]
    Laboratory,
    #[serde(rename = "faculty")]
    FacultyOffice,
    #[serde(rename = "management")]
    ManagementOffice,
    Washroom,
    #[serde(rename = "breakout")]
    BreakoutArea,
    /// Anything the map has no style for (storage, other, ...)
    #[default]
    #[serde(other)]
    Unknown,
}

impl RoomCategory {
    /// Wire name, also used for `data-type` attributes
    pub fn as_str(self) -> &'static str {
        match self {
            RoomCategory::Classroom => "class",
            RoomCategory::Laboratory => "lab",
            RoomCategory::FacultyOffice => "faculty",
            RoomCategory::ManagementOffice => "management",
            RoomCategory::Washroom => "washroom",
            RoomCategory::BreakoutArea => "breakout",
            RoomCategory::Unknown => "unknown",
        }
    }
}

/// Maintenance status derived server-side from open tickets and broken assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Issue,
    #[default]
    #[serde(other)]
    Normal,
}

/// A room as returned by `GET /api/rooms/floor/{floor_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Display code, e.g. `VY401`
    pub number: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub floor_id: Option<FloorId>,
    #[serde(default, rename = "room_type")]
    pub category: RoomCategory,
    #[serde(default)]
    pub status: RoomStatus,
}

impl Room {
    pub fn new(id: RoomId, number: impl Into<String>, category: RoomCategory) -> Self {
        Self {
            id,
            number: number.into(),
            name: None,
            floor_id: None,
            category,
            status: RoomStatus::Normal,
        }
    }

    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    pub fn has_issue(&self) -> bool {
        self.status == RoomStatus::Issue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_from_api_json() {
        let json = r#"{
            "id": 12,
            "floor_id": 4,
            "number": "VY401",
            "name": "Classroom 401",
            "room_type": "class",
            "map_coords": null,
            "status": "issue",
            "has_open_tickets": true
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.id, 12);
        assert_eq!(room.category, RoomCategory::Classroom);
        assert!(room.has_issue());
    }

    #[test]
    fn test_unlisted_room_type_is_unknown() {
        let room: Room =
            serde_json::from_str(r#"{"id": 1, "number": "VY099", "room_type": "storage"}"#)
                .unwrap();
        assert_eq!(room.category, RoomCategory::Unknown);
        assert_eq!(room.status, RoomStatus::Normal);
    }

    #[test]
    fn test_room_status_values() {
        let issue: RoomStatus = serde_json::from_str(r#""issue""#).unwrap();
        let normal: RoomStatus = serde_json::from_str(r#""normal""#).unwrap();
        let other: RoomStatus = serde_json::from_str(r#""under_review""#).unwrap();
        assert_eq!(issue, RoomStatus::Issue);
        assert_eq!(normal, RoomStatus::Normal);
        assert_eq!(other, RoomStatus::Normal);
        assert_eq!(serde_json::to_string(&RoomStatus::Issue).unwrap(), r#""issue""#);
    }
}

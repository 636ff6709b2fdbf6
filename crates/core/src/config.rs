//! Page configuration
//!
//! Everything the page used to read from template-injected globals and
//! hard-coded constants: preselection, endpoints, layout dispatch rules and
//! validation limits. Loaded from TOML; every field has a default.
//!
//! ```toml
//! preselected_floor = 5
//! preselected_room = 42
//!
//! [endpoints]
//! base_url = "http://localhost:5000"
//!
//! [layout]
//! detailed_min_rooms = 12
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{FloorId, RoomId};

/// 16 MiB, matching the server's upload limit
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Top-level page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageConfig {
    /// Floor to load on start (deep link / reload)
    pub preselected_floor: Option<FloorId>,
    /// Room to select once its floor has rendered
    pub preselected_room: Option<RoomId>,
    /// Building whose floors populate the floor selector
    pub building_id: Option<i64>,
    pub endpoints: Endpoints,
    pub layout: LayoutRules,
    pub validation: ValidationRules,
}

impl PageConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Server endpoints. Paths are templates joined to `base_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub base_url: String,
    /// `{floor_id}` placeholder
    pub rooms_by_floor: String,
    /// `{room_id}` placeholder
    pub assets_by_room: String,
    /// `{number}` placeholder
    pub room_by_number: String,
    /// `{building_id}` placeholder
    pub floors_by_building: String,
    /// Form action the report is posted to
    pub report_action: String,
    /// Optional per-request timeout; none by default
    pub request_timeout_secs: Option<u64>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            rooms_by_floor: "/api/rooms/floor/{floor_id}".to_string(),
            assets_by_room: "/api/assets/{room_id}".to_string(),
            room_by_number: "/api/room/{number}".to_string(),
            floors_by_building: "/api/floors/{building_id}".to_string(),
            report_action: "/report".to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Thresholds driving the floor map layout dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutRules {
    /// Level tag of the ground floor schematic
    pub ground_level: String,
    /// Levels that have a detailed schematic
    pub detailed_levels: Vec<String>,
    /// Minimum room count before the detailed schematic is trusted
    pub detailed_min_rooms: usize,
    /// Building prefix of room codes (`VY` in `VY401`)
    pub room_prefix: String,
}

impl Default for LayoutRules {
    fn default() -> Self {
        Self {
            ground_level: "0".to_string(),
            detailed_levels: ["1", "2", "3", "4", "5", "7"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            detailed_min_rooms: 10,
            room_prefix: "VY".to_string(),
        }
    }
}

impl LayoutRules {
    pub fn is_detailed_level(&self, level: &str) -> bool {
        self.detailed_levels.iter().any(|l| l == level)
    }
}

/// Client-side validation limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Required suffix of reporter emails
    pub email_domain: String,
    pub max_upload_bytes: u64,
    pub allowed_image_types: Vec<String>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            email_domain: "@mitwpu.edu.in".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_image_types: [
                "image/png",
                "image/jpeg",
                "image/jpg",
                "image/gif",
                "image/webp",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

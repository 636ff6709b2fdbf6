//! Floor model - an entry of the floor selector

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned floor identifier
pub type FloorId = i64;

/// A floor of the building. `level` is the layout tier tag (`"0"` = ground).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    #[serde(deserialize_with = "level_tag")]
    pub level: String,
}

impl Floor {
    pub fn new(id: FloorId, name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            level: level.into(),
        }
    }
}

/// The API sends levels as integers, page templates as strings
fn level_tag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Level {
        Text(String),
        Number(i64),
    }

    Ok(match Level::deserialize(deserializer)? {
        Level::Text(s) => s,
        Level::Number(n) => n.to_string(),
    })
}

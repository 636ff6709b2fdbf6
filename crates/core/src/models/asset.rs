//! Asset model - equipment installed in a room

use serde::{Deserialize, Serialize};

pub type AssetId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub asset_type: String,
    /// working / broken / maintenance
    #[serde(default)]
    pub status: Option<String>,
}

impl Asset {
    pub fn new(id: AssetId, name: impl Into<String>, asset_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            asset_type: asset_type.into(),
            status: None,
        }
    }

    /// Option label shown in the asset select
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.asset_type)
    }
}

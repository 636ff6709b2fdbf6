//! Report draft - the in-progress issue report composed in the form

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AssetId, RoomId};
use crate::error::Result;

/// Issue categories offered by the report form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Electrical,
    Plumbing,
    Furniture,
    Projector,
    Ac,
    Lighting,
    Computer,
    Cleaning,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 9] = [
        IssueType::Electrical,
        IssueType::Plumbing,
        IssueType::Furniture,
        IssueType::Projector,
        IssueType::Ac,
        IssueType::Lighting,
        IssueType::Computer,
        IssueType::Cleaning,
        IssueType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueType::Electrical => "electrical",
            IssueType::Plumbing => "plumbing",
            IssueType::Furniture => "furniture",
            IssueType::Projector => "projector",
            IssueType::Ac => "ac",
            IssueType::Lighting => "lighting",
            IssueType::Computer => "computer",
            IssueType::Cleaning => "cleaning",
            IssueType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IssueType::Electrical => "Electrical Issue",
            IssueType::Plumbing => "Plumbing Issue",
            IssueType::Furniture => "Furniture/Bench Damage",
            IssueType::Projector => "Projector/AV Equipment",
            IssueType::Ac => "Air Conditioning",
            IssueType::Lighting => "Lighting",
            IssueType::Computer => "Computer/Lab Equipment",
            IssueType::Cleaning => "Cleaning Required",
            IssueType::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// An image picked in the file input. Held by reference; bytes are read at send time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
    pub path: PathBuf,
}

impl Attachment {
    /// Describe a file on disk, guessing the content type from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let content_type = match extension.as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            _ => "application/octet-stream",
        };

        Ok(Self {
            file_name,
            content_type: content_type.to_string(),
            size: metadata.len(),
            path: path.to_path_buf(),
        })
    }
}

/// Form state of one report, submitted atomically and cleared on success
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub reporter_name: String,
    pub prn: String,
    pub reporter_email: String,
    /// Hidden field written by room selection
    pub room_id: Option<RoomId>,
    pub asset_id: Option<AssetId>,
    pub issue_type: Option<IssueType>,
    pub description: String,
    pub image: Option<Attachment>,
}

impl ReportDraft {
    /// Text fields in form order, empty values included as a browser form would send them
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("reporter_name", self.reporter_name.clone()),
            ("prn", self.prn.clone()),
            ("reporter_email", self.reporter_email.clone()),
            (
                "room_id",
                self.room_id.map(|id| id.to_string()).unwrap_or_default(),
            ),
            (
                "asset_id",
                self.asset_id.map(|id| id.to_string()).unwrap_or_default(),
            ),
            (
                "issue_type",
                self.issue_type
                    .map(|t| t.as_str().to_string())
                    .unwrap_or_default(),
            ),
            ("description", self.description.clone()),
        ]
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Ticket number issued by the server on a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(pub u64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:04}", self.0)
    }
}

//! Response envelopes of the room-data API
//!
//! Every endpoint answers with a JSON object carrying a boolean `success`
//! flag next to its payload.

use serde::{Deserialize, Serialize};
use vyas_core::{Asset, Floor, Room, TicketId};

use crate::error::{Error, Result};

/// `GET /api/rooms/floor/{floor_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomsResponse {
    pub success: bool,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

/// `GET /api/assets/{room_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsResponse {
    pub success: bool,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// `GET /api/floors/{building_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorsResponse {
    pub success: bool,
    #[serde(default)]
    pub floors: Vec<Floor>,
}

/// `GET /api/room/{number}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResponse {
    pub success: bool,
    #[serde(default)]
    pub room: Option<Room>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST {form action}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub ticket_id: Option<TicketId>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// What a submission amounted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { ticket_id: TicketId },
    Rejected { errors: Vec<String> },
}

impl SubmitResponse {
    /// Interpret the envelope. A success without a ticket number is malformed.
    pub fn outcome(self) -> Result<SubmitOutcome> {
        match (self.success, self.ticket_id) {
            (true, Some(ticket_id)) => Ok(SubmitOutcome::Accepted { ticket_id }),
            (true, None) => Err(Error::Protocol(
                "Submission accepted without a ticket_id".into(),
            )),
            (false, _) => Ok(SubmitOutcome::Rejected {
                errors: self.errors,
            }),
        }
    }
}

//! In-memory `FacilityApi` for handler tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use vyas_core::{Asset, Floor, FloorId, ReportDraft, Room, RoomId, TicketId};
use vyas_net::{
    AssetsResponse, Error, FacilityApi, FloorsResponse, Result, RoomResponse, RoomsResponse,
    SubmitResponse,
};

#[derive(Default)]
pub struct MockApi {
    rooms: Mutex<HashMap<FloorId, RoomsResponse>>,
    assets: Mutex<HashMap<RoomId, AssetsResponse>>,
    submit_response: Mutex<Option<SubmitResponse>>,
    /// Requests for these floors wait until notified
    floor_gates: Mutex<HashMap<FloorId, Arc<Notify>>>,
    room_gates: Mutex<HashMap<RoomId, Arc<Notify>>>,
    submit_gate: Mutex<Option<Arc<Notify>>>,

    pub floor_calls: Mutex<Vec<FloorId>>,
    pub asset_calls: Mutex<Vec<RoomId>>,
    pub submissions: Mutex<Vec<(String, ReportDraft)>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_floor(self, floor_id: FloorId, rooms: Vec<Room>) -> Self {
        self.rooms.lock().unwrap().insert(
            floor_id,
            RoomsResponse {
                success: true,
                rooms,
            },
        );
        self
    }

    /// The server answers `success: false` for this floor
    pub fn with_failed_floor(self, floor_id: FloorId) -> Self {
        self.rooms.lock().unwrap().insert(
            floor_id,
            RoomsResponse {
                success: false,
                rooms: Vec::new(),
            },
        );
        self
    }

    pub fn with_assets(self, room_id: RoomId, assets: Vec<Asset>) -> Self {
        self.assets.lock().unwrap().insert(
            room_id,
            AssetsResponse {
                success: true,
                assets,
            },
        );
        self
    }

    pub fn with_ticket(self, ticket: u64) -> Self {
        *self.submit_response.lock().unwrap() = Some(SubmitResponse {
            success: true,
            ticket_id: Some(TicketId(ticket)),
            message: Some("Ticket submitted successfully".to_string()),
            errors: Vec::new(),
        });
        self
    }

    pub fn with_rejection(self, errors: &[&str]) -> Self {
        *self.submit_response.lock().unwrap() = Some(SubmitResponse {
            success: false,
            ticket_id: None,
            message: None,
            errors: errors.iter().map(|e| e.to_string()).collect(),
        });
        self
    }

    /// Hold room requests for `floor_id` until the returned gate is notified
    pub fn gate_floor(&self, floor_id: FloorId) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.floor_gates.lock().unwrap().insert(floor_id, gate.clone());
        gate
    }

    pub fn gate_room(&self, room_id: RoomId) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.room_gates.lock().unwrap().insert(room_id, gate.clone());
        gate
    }

    pub fn gate_submit(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.submit_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

#[async_trait]
impl FacilityApi for MockApi {
    async fn rooms_on_floor(&self, floor_id: FloorId) -> Result<RoomsResponse> {
        self.floor_calls.lock().unwrap().push(floor_id);
        let gate = self.floor_gates.lock().unwrap().get(&floor_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.rooms
            .lock()
            .unwrap()
            .get(&floor_id)
            .cloned()
            .ok_or_else(|| Error::Protocol("connection refused".to_string()))
    }

    async fn assets_in_room(&self, room_id: RoomId) -> Result<AssetsResponse> {
        self.asset_calls.lock().unwrap().push(room_id);
        let gate = self.room_gates.lock().unwrap().get(&room_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.assets
            .lock()
            .unwrap()
            .get(&room_id)
            .cloned()
            .ok_or(Error::Status(500))
    }

    async fn submit_report(&self, action: &str, draft: &ReportDraft) -> Result<SubmitResponse> {
        self.submissions
            .lock()
            .unwrap()
            .push((action.to_string(), draft.clone()));
        let gate = self.submit_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.submit_response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Protocol("connection reset".to_string()))
    }

    async fn floors_in_building(&self, _building_id: i64) -> Result<FloorsResponse> {
        Ok(FloorsResponse {
            success: true,
            floors: vec![Floor::new(1, "1st Floor", "1")],
        })
    }

    async fn room_by_number(&self, number: &str) -> Result<RoomResponse> {
        let room = self
            .rooms
            .lock()
            .unwrap()
            .values()
            .flat_map(|r| r.rooms.iter())
            .find(|r| r.number == number)
            .cloned();

        Ok(RoomResponse {
            success: room.is_some(),
            error: room.is_none().then(|| "Room not found".to_string()),
            room,
        })
    }
}

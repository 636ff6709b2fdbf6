//! Floor selection and map loading

use tracing::{debug, error, info, warn};
use vyas_core::floor_map::placeholder::Severity;
use vyas_core::{render_floor_map, Floor, FloorId};

use super::PageController;
use crate::page::{MapContainer, FLOOR_LOAD_FAILED};

impl PageController {
    /// Floor selector changed. `None` is the empty option.
    pub async fn on_floor_changed(&self, floor_id: Option<FloorId>) {
        let (floor, generation) = {
            let mut page = self.page();
            page.floor_select.selected = floor_id;
            // Any map still loading is no longer wanted
            let generation = self.state.floor_requests.advance();
            let floor = floor_id.and_then(|id| page.floor_select.option(id).cloned());
            if floor.is_none() {
                page.map = MapContainer::Prompt;
            }
            (floor, generation)
        };

        if let Some(floor) = floor {
            self.fetch_floor_map(&floor, generation).await;
        }
    }

    /// Fetch the rooms of `floor` and render its map
    pub async fn load_floor_map(&self, floor: &Floor) {
        let generation = {
            let _page = self.page();
            self.state.floor_requests.advance()
        };
        self.fetch_floor_map(floor, generation).await;
    }

    async fn fetch_floor_map(&self, floor: &Floor, generation: u64) {
        {
            let mut page = self.page();
            if !self.state.floor_requests.is_current(generation) {
                return;
            }
            page.map = MapContainer::Loading { floor_id: floor.id };
        }

        let container = match self.api.rooms_on_floor(floor.id).await {
            Ok(response) if response.success => {
                let map = render_floor_map(&response.rooms, &floor.level, &self.config.layout);
                info!(
                    floor_id = floor.id,
                    rooms = response.rooms.len(),
                    targets = map.targets.len(),
                    "Floor map ready"
                );
                MapContainer::Rendered {
                    floor_id: floor.id,
                    map,
                }
            }
            Ok(_) => {
                warn!(floor_id = floor.id, "Server could not list rooms");
                MapContainer::Failed {
                    message: FLOOR_LOAD_FAILED.to_string(),
                    severity: Severity::Warning,
                }
            }
            Err(e) => {
                error!(floor_id = floor.id, error = %e, "Failed to fetch rooms");
                MapContainer::Failed {
                    message: format!("Error loading floor plan: {}", e),
                    severity: Severity::Danger,
                }
            }
        };

        let pending = {
            let mut page = self.page();
            if !self.state.floor_requests.is_current(generation) {
                debug!(floor_id = floor.id, "Discarding stale floor map response");
                return;
            }

            let pending = container
                .floor_map()
                .and_then(|map| self.state.take_pending_room(map));
            page.map = container;

            // Keep the highlight in step with a room still held by the form
            let current = page.form.draft.room_id;
            let shown = current.filter(|id| {
                page.map
                    .floor_map()
                    .map_or(false, |m| m.target(*id).is_some())
            });
            page.highlight_room(shown);
            pending
        };

        if let Some(target) = pending {
            info!(room = %target.code, "Selecting preselected room");
            self.select_room(&target.code, target.id).await;
        }
    }
}

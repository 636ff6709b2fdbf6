//! Room selection and asset loading

use tracing::{debug, info, warn};
use vyas_core::{AssetId, RoomId};

use super::PageController;
use crate::page::{RoomDisplay, ASSET_LOAD_FAILED};

impl PageController {
    /// A room element on the map was clicked
    pub async fn select_room(&self, code: &str, room_id: RoomId) {
        let generation = {
            let mut page = self.page();
            page.form.draft.room_id = Some(room_id);
            page.form.draft.asset_id = None;
            page.room_display = RoomDisplay::Selected {
                code: code.to_string(),
            };
            page.highlight_room(Some(room_id));
            self.state.asset_requests.advance()
        };
        info!(room = code, room_id, "Room selected");

        self.fetch_assets(room_id, generation).await;
    }

    /// Fill the asset select with the equipment of `room_id`
    pub async fn load_assets(&self, room_id: RoomId) {
        let generation = {
            let _page = self.page();
            self.state.asset_requests.advance()
        };
        self.fetch_assets(room_id, generation).await;
    }

    async fn fetch_assets(&self, room_id: RoomId, generation: u64) {
        let result = self.api.assets_in_room(room_id).await;

        let mut page = self.page();
        if !self.state.asset_requests.is_current(generation) {
            debug!(room_id, "Discarding stale asset response");
            return;
        }

        match result {
            Ok(response) if response.success => {
                debug!(room_id, assets = response.assets.len(), "Assets loaded");
                page.asset_select.populate(&response.assets);
            }
            Ok(_) => {
                warn!(room_id, "Server could not list assets");
                page.asset_select.fail(ASSET_LOAD_FAILED);
            }
            Err(e) => {
                warn!(room_id, error = %e, "Failed to fetch assets");
                page.asset_select.fail(ASSET_LOAD_FAILED);
            }
        }
    }

    /// Pick an asset; `None` is the optional empty choice.
    /// Returns false if the asset is not currently offered.
    pub fn select_asset(&self, asset_id: Option<AssetId>) -> bool {
        let mut page = self.page();
        match asset_id {
            Some(id) if !page.asset_select.offers(id) => false,
            _ => {
                page.form.draft.asset_id = asset_id;
                true
            }
        }
    }

    /// Back to "no room selected" after a successful submission
    pub(super) fn reset_room_selection(&self) {
        let mut page = self.page();
        self.state.asset_requests.advance();
        page.form.draft.room_id = None;
        page.form.draft.asset_id = None;
        page.room_display = RoomDisplay::Placeholder;
        page.asset_select.reset();
        page.highlight_room(None);
    }
}

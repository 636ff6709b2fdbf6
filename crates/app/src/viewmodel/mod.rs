//! Page handlers
//!
//! `PageController` owns the page model and reacts to user events: floor
//! changes, room clicks, field edits and form submission. Server calls go
//! through a [`FacilityApi`]; the page lock is never held across them.

mod floor_map;
mod report;
mod room;
mod validation;

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};
use vyas_core::{Floor, PageConfig};
use vyas_net::FacilityApi;

use crate::page::PageView;
use crate::state::PageState;

pub use report::SubmitStatus;

pub struct PageController {
    api: Arc<dyn FacilityApi>,
    config: PageConfig,
    page: Mutex<PageView>,
    state: PageState,
}

impl PageController {
    pub fn new(api: Arc<dyn FacilityApi>, config: PageConfig, floors: Vec<Floor>) -> Self {
        let page = PageView::new(floors, config.endpoints.report_action.clone());
        let state = PageState::new(config.preselected_room);

        Self {
            api,
            config,
            page: Mutex::new(page),
            state,
        }
    }

    /// Apply the preselected floor, if any, once the page is shown
    pub async fn start(&self) {
        let Some(floor_id) = self.config.preselected_floor else {
            return;
        };

        let floor = self.page().floor_select.option(floor_id).cloned();
        match floor {
            Some(floor) => {
                info!(floor_id, "Opening preselected floor");
                self.page().floor_select.selected = Some(floor_id);
                self.load_floor_map(&floor).await;
            }
            None => warn!(floor_id, "Preselected floor is not offered"),
        }
    }

    /// Lock the page model. Never keep the guard across an `.await`.
    pub fn page(&self) -> MutexGuard<'_, PageView> {
        self.page.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Copy of the current page model
    pub fn snapshot(&self) -> PageView {
        self.page().clone()
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn dismiss_alert(&self) {
        self.page().alert = None;
    }
}

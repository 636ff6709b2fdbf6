//! Report submission

use std::sync::Mutex;

use tracing::{error, info, warn};
use vyas_core::TicketId;
use vyas_net::SubmitOutcome;

use super::PageController;
use crate::page::{
    PageView, GENERIC_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE, SELECT_ROOM_MESSAGE, SUBMITTING_LABEL,
    SUBMIT_LABEL,
};

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// PRN or email failed the client-side checks
    Invalid,
    /// No room picked on the map
    MissingRoom,
    Accepted(TicketId),
    /// The server refused the report with these messages
    Rejected(Vec<String>),
    /// Transport or protocol failure
    Failed,
}

/// Holds the submit button in its busy state until dropped
struct SubmitGuard<'a> {
    page: &'a Mutex<PageView>,
}

impl<'a> SubmitGuard<'a> {
    fn engage(page: &'a Mutex<PageView>) -> Self {
        {
            let mut view = page.lock().unwrap_or_else(|e| e.into_inner());
            view.submit_button.disabled = true;
            view.submit_button.label = SUBMITTING_LABEL.to_string();
            view.error_banner.visible = false;
        }
        Self { page }
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        let mut view = self.page.lock().unwrap_or_else(|e| e.into_inner());
        view.submit_button.disabled = false;
        view.submit_button.label = SUBMIT_LABEL.to_string();
    }
}

impl PageController {
    /// Submit the report form
    pub async fn submit(&self) -> SubmitStatus {
        if !self.validate_form() {
            return SubmitStatus::Invalid;
        }

        let (action, draft) = {
            let mut page = self.page();
            if page.form.draft.room_id.is_none() {
                page.show_errors(vec![SELECT_ROOM_MESSAGE.to_string()]);
                return SubmitStatus::MissingRoom;
            }
            (page.form.action.clone(), page.form.draft.clone())
        };

        let _busy = SubmitGuard::engage(&self.page);

        let result = self
            .api
            .submit_report(&action, &draft)
            .await
            .and_then(|response| response.outcome());

        match result {
            Ok(SubmitOutcome::Accepted { ticket_id }) => {
                info!(ticket = %ticket_id, room_id = ?draft.room_id, "Report accepted");
                {
                    let mut page = self.page();
                    page.success_dialog.show(ticket_id);
                    page.form.reset();
                }
                self.reset_room_selection();
                SubmitStatus::Accepted(ticket_id)
            }
            Ok(SubmitOutcome::Rejected { errors }) => {
                warn!(errors = errors.len(), "Report rejected");
                let messages = if errors.is_empty() {
                    vec![GENERIC_ERROR_MESSAGE.to_string()]
                } else {
                    errors.clone()
                };
                self.page().show_errors(messages);
                SubmitStatus::Rejected(errors)
            }
            Err(e) => {
                error!(error = %e, "Report submission failed");
                self.page()
                    .show_errors(vec![NETWORK_ERROR_MESSAGE.to_string()]);
                SubmitStatus::Failed
            }
        }
    }

    pub fn close_success_dialog(&self) {
        self.page().success_dialog.hide();
    }
}

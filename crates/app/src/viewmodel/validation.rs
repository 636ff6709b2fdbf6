//! Field edits and client-side checks

use tracing::warn;
use vyas_core::validation::{
    check_attachment, is_institutional_email, is_valid_prn, sanitize_prn, AttachmentError,
};
use vyas_core::{Attachment, IssueType};

use super::PageController;

impl PageController {
    pub fn set_reporter_name(&self, name: &str) {
        self.page().form.draft.reporter_name = name.to_string();
    }

    /// PRN keystroke: only digits survive
    pub fn on_prn_input(&self, raw: &str) {
        self.page().form.draft.prn = sanitize_prn(raw);
    }

    pub fn set_reporter_email(&self, email: &str) {
        self.page().form.draft.reporter_email = email.to_string();
    }

    /// Email field lost focus. Returns whether the value is acceptable.
    pub fn on_email_blur(&self) -> bool {
        let mut page = self.page();
        let valid = is_institutional_email(
            &page.form.draft.reporter_email,
            &self.config.validation.email_domain,
        );
        page.form.email_invalid = !valid;
        valid
    }

    pub fn set_issue_type(&self, issue_type: Option<IssueType>) {
        self.page().form.draft.issue_type = issue_type;
    }

    pub fn set_description(&self, description: &str) {
        self.page().form.draft.description = description.to_string();
    }

    /// A file was picked (or the picker cleared). A rejected file raises an
    /// alert and leaves the field empty.
    pub fn on_image_selected(&self, attachment: Option<Attachment>) -> Result<(), AttachmentError> {
        let mut page = self.page();
        let Some(attachment) = attachment else {
            page.form.draft.image = None;
            return Ok(());
        };

        match check_attachment(&attachment, &self.config.validation) {
            Ok(()) => {
                page.form.draft.image = Some(attachment);
                Ok(())
            }
            Err(e) => {
                warn!(file = %attachment.file_name, error = %e, "Rejected attachment");
                page.form.draft.image = None;
                page.alert = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Check PRN and email, marking the invalid ones. Empty fields pass here;
    /// the server reports required fields.
    pub(super) fn validate_form(&self) -> bool {
        let mut page = self.page();
        page.form.prn_invalid = !is_valid_prn(&page.form.draft.prn);
        page.form.email_invalid = !is_institutional_email(
            &page.form.draft.reporter_email,
            &self.config.validation.email_domain,
        );

        !(page.form.prn_invalid || page.form.email_invalid)
    }
}

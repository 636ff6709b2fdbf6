//! Page model
//!
//! Typed stand-ins for the widgets of the report page: floor selector, map
//! container, selected-room panel, report form, asset select, error banner,
//! submit button and success dialog.

use chrono::{DateTime, Local};
use vyas_core::floor_map::placeholder::{self, Severity};
use vyas_core::invariants::{assert_selection_invariants, is_room_element};
use vyas_core::{Asset, AssetId, Element, Floor, FloorId, FloorMap, Node, ReportDraft, RoomId, TicketId};

pub const SELECT_ROOM_MESSAGE: &str = "Please select a room from the map";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub const FLOOR_LOAD_FAILED: &str = "Failed to load floor plan";
pub const ASSET_LOAD_FAILED: &str = "Could not load equipment for this room";
pub const SUBMIT_LABEL: &str = "Submit Report";
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Class toggled on the chosen room element
const SELECTED: &str = "selected";

/// The whole page
#[derive(Debug, Clone)]
pub struct PageView {
    pub floor_select: FloorSelect,
    pub map: MapContainer,
    pub room_display: RoomDisplay,
    pub form: ReportForm,
    pub asset_select: AssetSelect,
    pub error_banner: ErrorBanner,
    pub submit_button: SubmitButton,
    pub success_dialog: SuccessDialog,
    /// Blocking alert raised by the page, if any
    pub alert: Option<String>,
}

impl PageView {
    pub fn new(floors: Vec<Floor>, action: impl Into<String>) -> Self {
        Self {
            floor_select: FloorSelect {
                options: floors,
                selected: None,
            },
            map: MapContainer::Prompt,
            room_display: RoomDisplay::Placeholder,
            form: ReportForm::new(action),
            asset_select: AssetSelect::default(),
            error_banner: ErrorBanner::default(),
            submit_button: SubmitButton::default(),
            success_dialog: SuccessDialog::default(),
            alert: None,
        }
    }

    /// Move the `selected` class to the element of `room_id` (or nowhere)
    pub fn highlight_room(&mut self, room_id: Option<RoomId>) {
        let Some(root) = self.map.root_mut() else {
            return;
        };

        root.walk_mut(&mut |el| {
            if is_room_element(el) {
                el.remove_class(SELECTED);
            }
        });

        if let Some(id) = room_id {
            let id = id.to_string();
            if let Some(el) = root
                .find_mut(&|el| is_room_element(el) && el.get_attr("data-room-id") == Some(id.as_str()))
            {
                el.add_class(SELECTED);
            }
        }

        assert_selection_invariants(root, room_id);
    }

    /// Id of the room element currently highlighted on the map
    pub fn highlighted_room(&self) -> Option<RoomId> {
        let root = self.map.root()?;
        root.find(&|el| is_room_element(el) && el.has_class(SELECTED))
            .and_then(|el| el.get_attr("data-room-id"))
            .and_then(|id| id.parse().ok())
    }

    pub fn show_errors(&mut self, messages: Vec<String>) {
        self.error_banner.messages = messages;
        self.error_banner.visible = true;
    }
}

/// Floor selector, pre-populated by the page
#[derive(Debug, Clone)]
pub struct FloorSelect {
    pub options: Vec<Floor>,
    pub selected: Option<FloorId>,
}

impl FloorSelect {
    pub fn option(&self, floor_id: FloorId) -> Option<&Floor> {
        self.options.iter().find(|f| f.id == floor_id)
    }
}

/// Contents of the map container
#[derive(Debug, Clone)]
pub enum MapContainer {
    /// No floor chosen
    Prompt,
    Loading { floor_id: FloorId },
    Rendered { floor_id: FloorId, map: FloorMap },
    Failed { message: String, severity: Severity },
}

impl MapContainer {
    pub fn root(&self) -> Option<&Node> {
        match self {
            MapContainer::Rendered { map, .. } => Some(&map.root),
            _ => None,
        }
    }

    fn root_mut(&mut self) -> Option<&mut Node> {
        match self {
            MapContainer::Rendered { map, .. } => Some(&mut map.root),
            _ => None,
        }
    }

    pub fn floor_map(&self) -> Option<&FloorMap> {
        match self {
            MapContainer::Rendered { map, .. } => Some(map),
            _ => None,
        }
    }

    /// Markup currently shown in the container
    pub fn to_node(&self) -> Node {
        match self {
            MapContainer::Prompt => placeholder::prompt(),
            MapContainer::Loading { .. } => placeholder::loading(),
            MapContainer::Rendered { map, .. } => map.root.clone(),
            MapContainer::Failed { message, severity } => placeholder::failed(message, *severity),
        }
    }
}

/// Panel showing which room is selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomDisplay {
    Placeholder,
    Selected { code: String },
}

impl RoomDisplay {
    pub fn to_node(&self) -> Node {
        match self {
            RoomDisplay::Placeholder => Element::new("div")
                .class("room-placeholder")
                .child(Element::new("i").class("bi bi-door-open"))
                .child(Element::new("span").text("No room selected"))
                .into(),
            RoomDisplay::Selected { code } => Element::new("div")
                .class("room-selected")
                .child(Element::new("i").class("bi bi-check-circle-fill me-2"))
                .child(Element::new("span").class("room-number").text(code.clone()))
                .child(Element::new("small").class("d-block").text("Selected"))
                .into(),
        }
    }
}

/// Report form fields and their invalid markers
#[derive(Debug, Clone)]
pub struct ReportForm {
    /// Endpoint the form posts to
    pub action: String,
    pub draft: ReportDraft,
    pub prn_invalid: bool,
    pub email_invalid: bool,
}

impl ReportForm {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            draft: ReportDraft::default(),
            prn_invalid: false,
            email_invalid: false,
        }
    }

    pub fn reset(&mut self) {
        self.draft.clear();
        self.prn_invalid = false;
        self.email_invalid = false;
    }
}

/// One `<option>` of a select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Asset select, filled once a room is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSelect {
    pub options: Vec<SelectOption>,
    pub disabled: bool,
    /// Hint shown under the control when loading failed
    pub notice: Option<String>,
}

impl Default for AssetSelect {
    fn default() -> Self {
        Self {
            options: vec![SelectOption::new("", "Select Asset")],
            disabled: true,
            notice: None,
        }
    }
}

impl AssetSelect {
    /// Replace the options with the assets of the selected room
    pub fn populate(&mut self, assets: &[Asset]) {
        self.options = std::iter::once(SelectOption::new("", "Select Asset (Optional)"))
            .chain(assets.iter().map(|a| SelectOption::new(a.id.to_string(), a.label())))
            .collect();
        self.disabled = false;
        self.notice = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn fail(&mut self, notice: &str) {
        self.reset();
        self.notice = Some(notice.to_string());
    }

    pub fn offers(&self, asset_id: AssetId) -> bool {
        let value = asset_id.to_string();
        !self.disabled && self.options.iter().any(|o| o.value == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    pub visible: bool,
    pub messages: Vec<String>,
}

impl ErrorBanner {
    /// Messages joined with line breaks
    pub fn to_node(&self) -> Node {
        let mut message = Element::new("div").attr("id", "errorMessage");
        for (i, line) in self.messages.iter().enumerate() {
            if i > 0 {
                message = message.child(Element::new("br"));
            }
            message = message.text(line.clone());
        }
        message.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: String,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            disabled: false,
            label: SUBMIT_LABEL.to_string(),
        }
    }
}

/// Acknowledgment shown after a ticket is created
#[derive(Debug, Clone, Default)]
pub struct SuccessDialog {
    pub visible: bool,
    pub ticket_label: String,
    pub submitted_at: Option<DateTime<Local>>,
}

impl SuccessDialog {
    pub fn show(&mut self, ticket_id: TicketId) {
        self.visible = true;
        self.ticket_label = ticket_id.to_string();
        self.submitted_at = Some(Local::now());
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Submission date as `18 Oct 2026`
    pub fn submitted_on(&self) -> Option<String> {
        self.submitted_at.map(|t| format_date(&t))
    }
}

/// Short date in day-month-year order
pub fn format_date<Tz: chrono::TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%d %b %Y").to_string()
}

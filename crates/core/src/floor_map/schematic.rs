//! Shared SVG frame for the schematic layouts

use crate::markup::{Element, Node};
use crate::models::{Room, RoomCategory};

use super::{style_class, LayoutKind, RoomTarget};

/// Slot geometry in the 500x800 schematic viewBox. Widths and heights are even.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    fn center(&self) -> (u32, u32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// A fixed room position in a schematic, addressed by room code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub code: String,
    pub rect: Rect,
    /// Text drawn in the slot; the code when absent
    pub label: Option<String>,
    /// Category forced by the drawing regardless of the backing record
    pub category: Option<RoomCategory>,
}

impl Slot {
    pub fn new(code: String, rect: Rect) -> Self {
        Self {
            code,
            rect,
            label: None,
            category: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn category(mut self, category: RoomCategory) -> Self {
        self.category = Some(category);
        self
    }
}

/// Static parts of a schematic drawing
pub(super) struct Frame {
    pub corridor: &'static str,
    pub marker: (u32, u32),
}

/// Render slots into the schematic frame, collecting interactive targets
pub(super) fn render(
    kind: LayoutKind,
    frame: &Frame,
    slots: &[Slot],
    rooms: &[Room],
) -> (Node, Vec<RoomTarget>) {
    let mut targets = Vec::new();

    let mut svg = Element::new("svg")
        .attr("viewBox", "0 0 500 800")
        .attr("width", "100%")
        .attr("height", "100%")
        .class("interactive-map")
        .child(glow_filter())
        .child(
            Element::new("path")
                .attr("d", frame.corridor)
                .attr("stroke", "#e9ecef")
                .attr("stroke-width", 2)
                .attr("fill", "none"),
        );

    for slot in slots {
        let room = rooms.iter().find(|r| r.number == slot.code);
        if let Some(room) = room {
            targets.push(RoomTarget {
                code: slot.code.clone(),
                id: room.id,
            });
        }
        svg = svg.child(room_group(kind, slot, room));
    }

    svg = svg.child(you_are_here(frame.marker));

    let root: Node = Element::new("div")
        .class("vyas-floor-map svg-container")
        .child(svg)
        .into();

    (root, targets)
}

fn room_group(kind: LayoutKind, slot: &Slot, room: Option<&Room>) -> Element {
    let category = slot
        .category
        .or(room.map(|r| r.category))
        .unwrap_or(RoomCategory::Unknown);

    let mut rect = Element::new("rect")
        .attr("x", slot.rect.x)
        .attr("y", slot.rect.y)
        .attr("width", slot.rect.w)
        .attr("height", slot.rect.h)
        .class("room-poly");
    if let Some(fill) = style_class(kind, category) {
        rect = rect.class(fill);
    }
    if room.is_some_and(Room::has_issue) {
        rect = rect.class("has-issue");
    }
    rect = rect.attr("rx", 4);

    let (cx, cy) = slot.rect.center();
    let text = Element::new("text")
        .attr("x", cx)
        .attr("y", cy)
        .class("room-text")
        .attr("text-anchor", "middle")
        .attr("dominant-baseline", "middle")
        .text(slot.label.as_deref().unwrap_or(&slot.code));

    let group = Element::new("g").class("room-group");
    let group = match room {
        Some(room) => group
            .attr("data-room", &slot.code)
            .attr("data-room-id", room.id),
        None => group.class("room-disabled"),
    };

    group.child(rect).child(text)
}

fn glow_filter() -> Element {
    Element::new("defs").child(
        Element::new("filter")
            .attr("id", "glow")
            .attr("x", "-20%")
            .attr("y", "-20%")
            .attr("width", "140%")
            .attr("height", "140%")
            .child(
                Element::new("feGaussianBlur")
                    .attr("stdDeviation", 3)
                    .attr("result", "coloredBlur"),
            )
            .child(
                Element::new("feMerge")
                    .child(Element::new("feMergeNode").attr("in", "coloredBlur"))
                    .child(Element::new("feMergeNode").attr("in", "SourceGraphic")),
            ),
    )
}

fn you_are_here((x, y): (u32, u32)) -> Element {
    Element::new("g")
        .attr("transform", format!("translate({}, {})", x, y))
        .child(
            Element::new("path")
                .attr("d", "M0 0 L10 -5 L10 5 Z")
                .attr("fill", "#c8102e"),
        )
        .child(
            Element::new("text")
                .attr("x", 15)
                .attr("y", 4)
                .attr("font-size", 12)
                .attr("fill", "#333")
                .text("You Are Here"),
        )
}

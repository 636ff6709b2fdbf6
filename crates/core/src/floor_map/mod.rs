//! Floor map rendering
//!
//! Turns a floor's room list into markup. Three layouts exist:
//!
//! - **Ground**: fixed schematic of the ground floor
//! - **Detailed**: schematic shared by the upper floors, slots addressed by
//!   `prefix + level + suffix`; only trusted once enough rooms are on record
//! - **Generic**: a plain grid with one block per room
//!
//! Schematic slots without a backing room render as disabled placeholders,
//! since not every physical room has been entered yet.

mod detailed;
mod generic;
mod ground;
pub mod placeholder;
mod schematic;

use std::collections::HashSet;

use crate::config::LayoutRules;
use crate::markup::Node;
use crate::models::{Room, RoomCategory, RoomId};

pub use schematic::{Rect, Slot};

/// Which layout a floor is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Ground,
    Detailed,
    Generic,
}

/// Layout chosen for a floor, carrying its slot schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FloorLayout {
    Ground(Vec<Slot>),
    Detailed(Vec<Slot>),
    Generic,
}

impl FloorLayout {
    /// Dispatch on level tag and room count
    pub fn select(level: &str, room_count: usize, rules: &LayoutRules) -> Self {
        if level == rules.ground_level {
            FloorLayout::Ground(ground::slots(&rules.room_prefix))
        } else if rules.is_detailed_level(level) && room_count >= rules.detailed_min_rooms {
            FloorLayout::Detailed(detailed::slots(&rules.room_prefix, level))
        } else {
            FloorLayout::Generic
        }
    }

    pub fn kind(&self) -> LayoutKind {
        match self {
            FloorLayout::Ground(_) => LayoutKind::Ground,
            FloorLayout::Detailed(_) => LayoutKind::Detailed,
            FloorLayout::Generic => LayoutKind::Generic,
        }
    }

    pub fn render(&self, rooms: &[Room]) -> FloorMap {
        let kind = self.kind();
        let (root, targets) = match self {
            FloorLayout::Ground(slots) => schematic::render(kind, &ground::FRAME, slots, rooms),
            FloorLayout::Detailed(slots) => {
                schematic::render(kind, &detailed::FRAME, slots, rooms)
            }
            FloorLayout::Generic => generic::render(rooms),
        };

        FloorMap {
            kind,
            root,
            targets,
        }
    }
}

/// A clickable room element of a rendered map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTarget {
    pub code: String,
    pub id: RoomId,
}

/// A rendered floor map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorMap {
    pub kind: LayoutKind,
    pub root: Node,
    /// Interactive rooms in document order
    pub targets: Vec<RoomTarget>,
}

impl FloorMap {
    pub fn target(&self, room_id: RoomId) -> Option<&RoomTarget> {
        self.targets.iter().find(|t| t.id == room_id)
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

/// Render the map of one floor
pub fn render_floor_map(rooms: &[Room], level: &str, rules: &LayoutRules) -> FloorMap {
    let rooms = distinct_rooms(rooms);
    let rooms = rooms.as_slice();
    let layout = FloorLayout::select(level, rooms.len(), rules);
    tracing::debug!(floor_level = level, rooms = rooms.len(), layout = ?layout.kind(), "Rendering floor map");

    let map = layout.render(rooms);
    crate::invariants::assert_floor_map_invariants(&map);
    map
}

/// First record of each room id; later repeats are dropped
fn distinct_rooms(rooms: &[Room]) -> Vec<Room> {
    let mut seen = HashSet::new();
    rooms
        .iter()
        .filter(|room| {
            let first = seen.insert(room.id);
            if !first {
                tracing::warn!(room_id = room.id, room = %room.number, "Dropping duplicate room record");
            }
            first
        })
        .cloned()
        .collect()
}

/// Category style per layout; `None` leaves the element unstyled
pub fn style_class(kind: LayoutKind, category: RoomCategory) -> Option<&'static str> {
    use RoomCategory::*;

    match kind {
        LayoutKind::Ground => match category {
            ManagementOffice => Some("fill-silver"),
            FacultyOffice => Some("fill-orange"),
            Laboratory | BreakoutArea | Washroom => Some("fill-red"),
            Classroom => Some("fill-blue"),
            Unknown => None,
        },
        LayoutKind::Detailed => match category {
            Classroom => Some("fill-blue"),
            Laboratory => Some("fill-teal"),
            Washroom => Some("fill-red"),
            _ => None,
        },
        LayoutKind::Generic => match category {
            Classroom => Some("classroom"),
            Laboratory => Some("lab"),
            Washroom => Some("washroom"),
            _ => None,
        },
    }
}

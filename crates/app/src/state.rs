//! Request bookkeeping shared by the page handlers

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use vyas_core::{FloorMap, RoomId, RoomTarget};

/// Monotonic request counter. A response is applied only if no newer
/// request of the same kind was issued while it was in flight.
#[derive(Debug, Default)]
pub struct Generation(AtomicU64);

impl Generation {
    /// Start a new request, superseding all earlier ones
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }
}

/// Page-wide request state
#[derive(Debug, Default)]
pub struct PageState {
    pub floor_requests: Generation,
    pub asset_requests: Generation,
    /// Room to select once its floor map is shown (consumed on use)
    pending_room: Mutex<Option<RoomId>>,
}

impl PageState {
    pub fn new(preselected_room: Option<RoomId>) -> Self {
        Self {
            pending_room: Mutex::new(preselected_room),
            ..Self::default()
        }
    }

    /// Take the pending room if `map` renders it
    pub fn take_pending_room(&self, map: &FloorMap) -> Option<RoomTarget> {
        let mut pending = self.pending_room.lock().unwrap_or_else(|e| e.into_inner());
        let target = map.target((*pending)?)?.clone();
        *pending = None;
        Some(target)
    }

    pub fn pending_room(&self) -> Option<RoomId> {
        *self.pending_room.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vyas_core::{render_floor_map, LayoutRules, Room, RoomCategory};

    #[test]
    fn test_generation_supersedes() {
        let generation = Generation::default();
        let first = generation.advance();
        assert!(generation.is_current(first));

        let second = generation.advance();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_pending_room_is_one_shot() {
        let state = PageState::new(Some(2));
        let elsewhere = render_floor_map(
            &[Room::new(1, "VY101", RoomCategory::Classroom)],
            "1",
            &LayoutRules::default(),
        );
        let here = render_floor_map(
            &[Room::new(2, "VY201", RoomCategory::Classroom)],
            "2",
            &LayoutRules::default(),
        );

        // Not on this floor: stays pending
        assert!(state.take_pending_room(&elsewhere).is_none());
        assert_eq!(state.pending_room(), Some(2));

        let target = state.take_pending_room(&here).unwrap();
        assert_eq!(target.code, "VY201");
        assert_eq!(state.pending_room(), None);
        assert!(state.take_pending_room(&here).is_none());
    }
}

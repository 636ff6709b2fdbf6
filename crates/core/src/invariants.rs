//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible page states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::floor_map::FloorMap;
use crate::markup::{Element, Node};
use crate::models::RoomId;

/// Elements the room selector toggles
pub fn is_room_element(el: &Element) -> bool {
    el.has_class("room-block") || el.has_class("room-group")
}

/// Validate that a rendered map is internally consistent
pub fn assert_floor_map_invariants(map: &FloorMap) {
    // Each room is clickable through at most one element
    let mut seen = HashSet::new();
    for target in &map.targets {
        debug_assert!(
            seen.insert(target.id),
            "Room {} ({}) rendered as more than one target",
            target.id,
            target.code
        );
    }

    // Every target has a matching element carrying its id
    for target in &map.targets {
        let id = target.id.to_string();
        debug_assert!(
            map.root
                .find(&|el| is_room_element(el) && el.get_attr("data-room-id") == Some(id.as_str()))
                .is_some(),
            "Target {} has no rendered element",
            target.code
        );
    }
}

/// Validate that at most one element is selected, and that it is `room_id`
pub fn assert_selection_invariants(root: &Node, room_id: Option<RoomId>) {
    let selected = root.select(&|el| is_room_element(el) && el.has_class("selected"));

    debug_assert!(
        selected.len() <= 1,
        "{} room elements marked selected, expected 0 or 1",
        selected.len()
    );

    if let (Some(el), Some(id)) = (selected.first(), room_id) {
        debug_assert!(
            el.get_attr("data-room-id") == Some(id.to_string().as_str()),
            "Selected element {:?} does not match room {}",
            el.get_attr("data-room-id"),
            id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_with_selection(selected: &[i64]) -> Node {
        let mut svg = Element::new("svg");
        for id in 1..=3 {
            let mut g = Element::new("g").class("room-group").attr("data-room-id", id);
            if selected.contains(&id) {
                g.add_class("selected");
            }
            svg = svg.child(g);
        }
        svg.into()
    }

    #[test]
    fn test_single_selection() {
        assert_selection_invariants(&map_with_selection(&[2]), Some(2));
        assert_selection_invariants(&map_with_selection(&[]), None);
    }

    #[test]
    #[should_panic(expected = "expected 0 or 1")]
    fn test_double_selection_detected() {
        assert_selection_invariants(&map_with_selection(&[1, 3]), Some(3));
    }

    #[test]
    #[should_panic(expected = "does not match room")]
    fn test_wrong_selection_detected() {
        assert_selection_invariants(&map_with_selection(&[1]), Some(3));
    }
}

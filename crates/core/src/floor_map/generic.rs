//! Generic grid used when no schematic applies

use crate::markup::{Element, Node};
use crate::models::Room;

use super::{style_class, LayoutKind, RoomTarget};

/// One block per room, in source order. Every block is interactive.
pub(super) fn render(rooms: &[Room]) -> (Node, Vec<RoomTarget>) {
    let blocks = rooms.iter().map(|room| {
        let mut block = Element::new("div").class("room-block");
        if let Some(class) = style_class(LayoutKind::Generic, room.category) {
            block = block.class(class);
        }
        if room.has_issue() {
            block = block.class("has-issue");
        }

        Node::from(
            block
                .attr("data-room", &room.number)
                .attr("data-room-id", room.id)
                .attr("data-type", room.category.as_str())
                .child(Element::new("span").class("room-label").text(room.number.clone())),
        )
    });

    let targets = rooms
        .iter()
        .map(|room| RoomTarget {
            code: room.number.clone(),
            id: room.id,
        })
        .collect();

    let root: Node = Element::new("div")
        .class("vyas-floor-map")
        .child(
            Element::new("div")
                .class("floor-layout generic")
                .child(Element::new("div").class("generic-grid").children(blocks)),
        )
        .into();

    (root, targets)
}

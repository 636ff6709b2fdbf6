//! Ground floor schematic

use crate::models::RoomCategory;

use super::schematic::{Frame, Rect, Slot};

pub(super) const FRAME: Frame = Frame {
    corridor: "M120 0 L120 800 M340 230 L340 800",
    marker: (80, 280),
};

/// Named slots of the ground floor. Offices and the breakout area keep their
/// drawn category whatever the backing record says.
pub(super) fn slots(prefix: &str) -> Vec<Slot> {
    use RoomCategory::*;

    let code = |suffix: &str| format!("{}{}", prefix, suffix);

    vec![
        // Left column
        Slot::new(code("001"), Rect::new(20, 20, 100, 100))
            .label("001")
            .category(ManagementOffice),
        Slot::new(code("002"), Rect::new(20, 130, 100, 100)),
        Slot::new(code("003"), Rect::new(20, 350, 100, 100)),
        Slot::new(code("004"), Rect::new(20, 460, 100, 100)),
        // Top center
        Slot::new(code("024"), Rect::new(140, 20, 100, 100))
            .label("024")
            .category(ManagementOffice),
        Slot::new(code("026"), Rect::new(140, 130, 100, 80))
            .label("026")
            .category(FacultyOffice),
        // Center block
        Slot::new(code("027"), Rect::new(140, 250, 180, 80))
            .label("027")
            .category(ManagementOffice),
        Slot::new(code("028"), Rect::new(140, 340, 180, 60)),
        Slot::new(code("029"), Rect::new(140, 410, 180, 60)),
        Slot::new(code("030"), Rect::new(140, 480, 180, 60)),
        // Right column
        Slot::new(code("016"), Rect::new(340, 250, 90, 100)),
        Slot::new(code("015"), Rect::new(340, 360, 90, 100)),
        Slot::new(code("014"), Rect::new(340, 480, 90, 80))
            .label("014")
            .category(Laboratory),
        // Bottom
        Slot::new(code("007"), Rect::new(250, 600, 100, 80))
            .label("Breakout\nArea")
            .category(BreakoutArea),
    ]
}

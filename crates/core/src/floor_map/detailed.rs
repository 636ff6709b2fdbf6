//! Detailed schematic shared by the upper floors

use super::schematic::{Frame, Rect, Slot};

pub(super) const FRAME: Frame = Frame {
    corridor: "M130 0 L130 800 M330 300 L330 800",
    marker: (80, 300),
};

/// Suffix and geometry of every slot; codes are `prefix + level + suffix`
const SLOTS: &[(&str, Rect)] = &[
    // Left column (classrooms)
    ("01", Rect::new(20, 50, 100, 100)),
    ("02", Rect::new(20, 160, 100, 100)),
    ("03", Rect::new(20, 350, 100, 100)),
    ("04", Rect::new(20, 460, 100, 100)),
    // Top center
    ("24", Rect::new(140, 50, 100, 140)),
    ("22", Rect::new(250, 120, 70, 70)),
    // Center labs
    ("26", Rect::new(140, 350, 180, 60)),
    ("27", Rect::new(140, 420, 180, 60)),
    ("28", Rect::new(140, 490, 180, 60)),
    ("29", Rect::new(140, 560, 180, 60)),
    // Right column (classrooms)
    ("14", Rect::new(340, 350, 90, 130)),
    ("13", Rect::new(340, 490, 90, 130)),
    // Far right strip, top cluster
    ("19", Rect::new(440, 300, 40, 30)),
    ("18", Rect::new(440, 335, 40, 30)),
    ("17", Rect::new(440, 370, 40, 30)),
    ("16", Rect::new(440, 405, 40, 30)),
    ("15", Rect::new(440, 440, 40, 30)),
    // Far right strip, bottom cluster
    ("08", Rect::new(440, 550, 40, 30)),
    ("07", Rect::new(440, 585, 40, 30)),
];

/// Strip slots are too narrow for a full code
const NARROW_WIDTH: u32 = 40;

pub(super) fn slots(prefix: &str, level: &str) -> Vec<Slot> {
    SLOTS
        .iter()
        .map(|(suffix, rect)| {
            let code = format!("{}{}{}", prefix, level, suffix);
            if rect.w <= NARROW_WIDTH {
                let short = last_chars(&code, 3).to_string();
                Slot::new(code, *rect).label(short)
            } else {
                Slot::new(code, *rect)
            }
        })
        .collect()
}

fn last_chars(s: &str, n: usize) -> &str {
    let start = s
        .char_indices()
        .rev()
        .nth(n.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    &s[start..]
}

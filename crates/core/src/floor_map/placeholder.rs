//! Map container placeholders (prompt, loading, failure)

use crate::markup::{Element, Node};

/// Icon tint of a failure placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The server answered but reported failure
    Warning,
    /// The request itself failed
    Danger,
}

impl Severity {
    fn text_class(self) -> &'static str {
        match self {
            Severity::Warning => "text-warning",
            Severity::Danger => "text-danger",
        }
    }
}

pub fn prompt() -> Node {
    frame(
        Element::new("i").class("bi bi-building display-1 text-muted"),
        "Select a floor to view the interactive map",
    )
}

pub fn loading() -> Node {
    frame(
        Element::new("div")
            .class("spinner-border text-primary")
            .attr("role", "status")
            .child(Element::new("span").class("visually-hidden").text("Loading...")),
        "Loading floor plan...",
    )
}

pub fn failed(message: &str, severity: Severity) -> Node {
    frame(
        Element::new("i")
            .class("bi bi-exclamation-triangle display-1")
            .class(severity.text_class()),
        message,
    )
}

fn frame(icon: Element, message: &str) -> Node {
    Element::new("div")
        .class("floor-map-placeholder")
        .child(icon)
        .child(Element::new("p").class("mt-3").text(message))
        .into()
}

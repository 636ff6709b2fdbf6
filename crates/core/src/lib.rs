//! Vyas Core Library
//!
//! Models, validation, markup and floor map rendering for the room
//! maintenance reporting page.

pub mod config;
pub mod error;
pub mod floor_map;
pub mod invariants;
pub mod markup;
pub mod models;
pub mod validation;

pub use config::{Endpoints, LayoutRules, PageConfig, ValidationRules};
pub use error::{Error, Result};
pub use floor_map::{render_floor_map, FloorLayout, FloorMap, LayoutKind, RoomTarget};
pub use markup::{Element, Node};
pub use models::*;

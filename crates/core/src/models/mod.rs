//! Data models for the reporting page

mod asset;
mod floor;
mod report;
mod room;

pub use asset::*;
pub use floor::*;
pub use report::*;
pub use room::*;

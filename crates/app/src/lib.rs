//! Vyas report page
//!
//! Page model and event handlers of the room maintenance reporting page.

pub mod error;
pub mod launch;
pub mod page;
pub mod state;
pub mod viewmodel;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use page::PageView;
pub use viewmodel::{PageController, SubmitStatus};

//! Vyas Network Library
//!
//! Client side of the room-data API consumed by the reporting page.
//!
//! # Architecture
//!
//! - **FacilityApi**: the seam between the page and the server
//! - **HttpClient**: `FacilityApi` over HTTP (JSON envelopes, multipart submission)
//! - **Protocol**: response envelopes with a `success` flag
//!
//! # Usage
//!
//! ```ignore
//! let client = HttpClient::new(&config.endpoints)?;
//! let response = client.rooms_on_floor(floor_id).await?;
//! if response.success {
//!     let map = render_floor_map(&response.rooms, &floor.level, &config.layout);
//! }
//! ```

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{FacilityApi, HttpClient};
pub use error::{Error, Result};
pub use protocol::{
    AssetsResponse, FloorsResponse, RoomResponse, RoomsResponse, SubmitOutcome, SubmitResponse,
};

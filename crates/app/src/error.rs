//! Application error types

/// Application result type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] vyas_core::Error),

    #[error(transparent)]
    Net(#[from] vyas_net::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No building configured; set building_id in the page config")]
    MissingBuilding,

    #[error("Server could not list floors of building {0}")]
    FloorsUnavailable(i64),

    #[error("Invalid room code: {0}")]
    InvalidRoomCode(String),

    #[error("Room not found: {0}")]
    RoomNotFound(String),
}

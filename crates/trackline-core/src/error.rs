//! Error types for trackline.

use thiserror::Error;

/// Main error type for trackline operations.
///
/// Store mutations return these instead of panicking; the gesture layer
/// absorbs them as no-ops and logs them.
#[derive(Error, Debug)]
pub enum TracklineError {
    #[error("Track not found: {0}")]
    TrackNotFound(u32),

    #[error("Clip {clip} not found on track {track}")]
    ClipNotFound { track: u32, clip: u64 },

    #[error("Track id already in use: {0}")]
    DuplicateTrack(u32),

    #[error("Index {index} out of range for {len} tracks")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Malformed gesture payload: {0}")]
    MalformedPayload(String),

    #[error("No gesture in progress")]
    NoActiveGesture,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for trackline operations.
pub type Result<T> = std::result::Result<T, TracklineError>;

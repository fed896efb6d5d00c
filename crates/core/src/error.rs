//! Error types for Roteiro

use thiserror::Error;

/// Main error type for Roteiro operations.
///
/// All variants concern document loading; once a document is loaded the
/// interactive core has no fallible operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed itinerary document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("itinerary has no days")]
    EmptyItinerary,

    #[error("day numbers must start at 1 and increase by 1: found day {found} at position {position}")]
    DayOutOfSequence { position: usize, found: u32 },
}

/// Result type alias for Roteiro operations
pub type Result<T> = std::result::Result<T, Error>;

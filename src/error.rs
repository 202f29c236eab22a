//! Error types for timegrid.

use crate::models::{CourseId, HolderId};
use thiserror::Error;

/// Result type for timetable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while manipulating the timetable model.
///
/// Every error is surfaced immediately at the point of misuse; nothing is
/// caught or retried internally. Silent overwrite of an occupied cell is
/// deliberately *not* an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A grid was accessed outside its fixed dimensions.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} bounds of grid '{grid}'")]
    OutOfBounds {
        grid: String,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A holder handle that was never issued by this registry.
    #[error("unknown holder id {0}")]
    UnknownHolder(HolderId),

    /// A course handle that was never issued by this registry.
    #[error("unknown course id {0}")]
    UnknownCourse(CourseId),

    /// JSON export error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

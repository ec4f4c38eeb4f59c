//! Local persistence
//!
//! The site keeps one local file: a JSON log of appointment requests. It is
//! a convenience copy next to the notification email, so every failure here
//! is logged and swallowed.

mod appointments;

pub use appointments::{append_record, AppointmentLog, AppointmentRecord};

use thiserror::Error;

/// Errors that can occur while writing the appointment log
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error during read or write
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Existing log is not a JSON array, or a record failed to serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

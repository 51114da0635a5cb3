//! Storage trait abstraction.

use coursetrack_core::{CourseConfig, ValidationError};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding/decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The stored record exists but a field cannot be read
    #[error("malformed record: {0}")]
    Malformed(String),

    /// The stored record holds a value outside its allowed range
    #[error("invalid record: {0}")]
    Invalid(#[from] ValidationError),
}

/// Backend holding the persisted course configuration.
///
/// This trait allows different storage backends to be plugged in.
pub trait RecordStore {
    /// Load the stored record.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load_record(&self) -> Result<Option<CourseConfig>>;

    /// Replace the stored record.
    ///
    /// Implementations must never leave a partially written record behind.
    fn save_record(&mut self, config: &CourseConfig) -> Result<()>;
}

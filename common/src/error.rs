//! Error types shared by every view-model and the studio facade.

use thiserror::Error;

/// Errors surfaced by studio operations.
///
/// Read failures never appear here: a slot that cannot be decoded loads
/// its default instead.
#[derive(Error, Debug)]
pub enum StudioError {
    /// A required input was blank after trimming.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The host storage rejected a write (quota exceeded, storage disabled).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A state value could not be serialized for its slot.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The file-backed store could not be read or written.
    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StudioError {
    /// True for errors caused by user input rather than the host.
    pub fn is_validation(&self) -> bool {
        matches!(self, StudioError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;

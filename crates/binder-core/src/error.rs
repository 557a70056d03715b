//! Error types for the staging and preview state machines.
//!
//! None of these ever reach the user. Event handlers in the browser layer
//! log them and drop them, leaving state untouched.

use thiserror::Error;

/// Failures of a [`FileStagingStore`](crate::FileStagingStore) operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StagingError {
    /// The input was never registered with the store.
    #[error("no staged files for input {0}")]
    UnknownInput(String),
    /// Removal index outside the current sequence.
    #[error("index {index} out of range for {len} staged files")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Failures creating a preview handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// The platform refused to mint a URL for the file.
    #[error("preview url unavailable: {0}")]
    Unavailable(String),
}

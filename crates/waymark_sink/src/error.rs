//! Error types for sink operations.

use std::io;
use thiserror::Error;

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Errors that can occur during sink operations.
#[derive(Debug, Error)]
pub enum SinkError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Attempted to patch bytes that were never appended.
    #[error("patch beyond end of sink: offset {offset}, len {len}, size {size}")]
    PatchOutOfBounds {
        /// The requested patch offset.
        offset: u64,
        /// The requested patch length.
        len: usize,
        /// The current sink size.
        size: u64,
    },
}

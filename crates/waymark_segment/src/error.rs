//! Error types for segment writing.

use thiserror::Error;
use waymark_sink::SinkError;

/// Result type for segment writing operations.
pub type SegmentResult<T> = Result<T, SegmentError>;

/// Errors that can occur while writing a segment.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// The underlying sink failed.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    /// The item count does not fit the 32-bit reserved field.
    #[error("segment count {count} exceeds the 32-bit count prefix")]
    CountOverflow {
        /// The item count that overflowed the field.
        count: u64,
    },
}

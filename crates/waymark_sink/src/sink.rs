//! Segment sink trait definition.

use crate::error::SinkResult;

/// A low-level output sink for waymark segments.
///
/// Sinks are **opaque byte sinks**. They provide simple operations for
/// appending bytes and patching previously appended bytes in place.
/// `waymark_segment` owns all segment framing - sinks do not understand
/// headers, count prefixes, or records.
///
/// # Invariants
///
/// - `append` returns the offset where the data landed
/// - `position` equals the offset the next `append` will write at
/// - `patch_at` leaves `position` unchanged
/// - `patch_at` may only touch bytes that were previously appended
///
/// # Implementors
///
/// - [`super::MemorySink`] - For testing
/// - [`super::FileSink`] - For writing data files to disk
pub trait SegmentSink {
    /// Returns the offset where the next `append` will write.
    ///
    /// Calling this never mutates the sink.
    fn position(&self) -> u64;

    /// Appends data at the end of the sink.
    ///
    /// Returns the offset where the data was written.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn append(&mut self, data: &[u8]) -> SinkResult<u64>;

    /// Overwrites previously appended bytes in place.
    ///
    /// The append position is unchanged when this returns, so a caller
    /// writing sequential segments observes only forward movement of the
    /// cursor. This is the primitive segment finalization uses to backpatch
    /// a reserved length field.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The patched range extends beyond the bytes appended so far
    /// - An I/O error occurs
    fn patch_at(&mut self, offset: u64, data: &[u8]) -> SinkResult<()>;

    /// Flushes all pending writes to the underlying medium.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush operation fails.
    fn flush(&mut self) -> SinkResult<()>;
}

//! In-memory sink for testing.

use crate::error::{SinkError, SinkResult};
use crate::sink::SegmentSink;

/// An in-memory segment sink.
///
/// This sink stores all output in memory and is suitable for:
/// - Unit tests that assert exact byte layouts
/// - Building a file image before writing it elsewhere
///
/// # Example
///
/// ```rust
/// use waymark_sink::{MemorySink, SegmentSink};
///
/// let mut sink = MemorySink::new();
/// sink.append(b"test data").unwrap();
/// assert_eq!(sink.position(), 9);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    data: Vec<u8>,
}

impl MemorySink {
    /// Creates a new empty in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bytes written so far.
    ///
    /// Useful for byte-exact assertions in tests.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the sink and returns the written bytes.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl SegmentSink for MemorySink {
    fn position(&self) -> u64 {
        self.data.len() as u64
    }

    fn append(&mut self, data: &[u8]) -> SinkResult<u64> {
        let offset = self.data.len() as u64;
        self.data.extend_from_slice(data);
        Ok(offset)
    }

    fn patch_at(&mut self, offset: u64, data: &[u8]) -> SinkResult<()> {
        let size = self.data.len() as u64;
        let end = offset.saturating_add(data.len() as u64);

        if offset > size || end > size {
            return Err(SinkError::PatchOutOfBounds {
                offset,
                len: data.len(),
                size,
            });
        }

        let start = offset as usize;
        self.data[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> SinkResult<()> {
        // Nothing buffered
        Ok(())
    }
}

//! The generic segment writer engine.

use crate::error::SegmentResult;
use crate::policy::{FinalizePolicy, HeaderPolicy, ItemPolicy};
use std::marker::PhantomData;
use waymark_sink::SegmentSink;

/// Writes one segment to a sink by sequencing three write policies.
///
/// The writer owns the write session for a single segment: construction
/// invokes the header policy once, each [`SegmentWriter::write`] invokes the
/// item policy, and [`SegmentWriter::finish`] (or, failing that, drop)
/// invokes the finalize policy exactly once. The writer holds an exclusive
/// borrow of the sink for its whole lifetime, which is what enforces
/// strictly sequential segment writing.
///
/// A segment's identity - `segment_start` and `header_offset` - is fixed at
/// construction; only the running count changes afterwards, and the
/// finalization backpatch is the single terminal mutation.
///
/// Prefer [`finish`](SegmentWriter::finish) over relying on drop:
/// finalization can fail (sink fault, count overflow), and drop can only
/// log that failure, not return it.
pub struct SegmentWriter<'a, S, HP, IP, FP>
where
    S: SegmentSink,
    FP: FinalizePolicy,
{
    sink: &'a mut S,
    segment_start: u64,
    header_offset: u64,
    count: u64,
    finished: bool,
    _policies: PhantomData<fn() -> (HP, IP, FP)>,
}

impl<'a, S, HP, IP, FP> SegmentWriter<'a, S, HP, IP, FP>
where
    S: SegmentSink,
    FP: FinalizePolicy,
{
    /// Opens a segment at the sink's current position and writes its header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header policy fails.
    pub fn new<H>(sink: &'a mut S, header: &H) -> SegmentResult<Self>
    where
        HP: HeaderPolicy<H>,
    {
        let segment_start = sink.position();
        let header_offset = HP::write(header, sink, segment_start, 0)?;

        tracing::trace!(segment_start, header_offset, "opened segment");

        Ok(Self {
            sink,
            segment_start,
            header_offset,
            count: 0,
            finished: false,
            _policies: PhantomData,
        })
    }

    /// Writes one item through the item policy.
    ///
    /// The policy's return value (0 or 1) is added to the running count.
    /// May be called any number of times, including zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the item policy fails.
    pub fn write<T>(&mut self, item: &T) -> SegmentResult<()>
    where
        IP: ItemPolicy<T>,
    {
        let written = IP::write(
            item,
            self.sink,
            self.segment_start,
            self.header_offset,
            self.count,
        )?;
        self.count += written;
        Ok(())
    }

    /// Returns the number of items written so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Finalizes the segment and returns the final item count.
    ///
    /// Consuming the writer guarantees no further writes, and releases the
    /// sink borrow so the next segment can be opened. The sink's append
    /// position is unchanged by finalization, so consecutive segments are
    /// contiguous.
    ///
    /// # Errors
    ///
    /// Returns an error if the finalize policy fails. The finalize policy
    /// runs at most once either way.
    pub fn finish(mut self) -> SegmentResult<u64> {
        self.finished = true;
        FP::write(
            self.sink,
            self.segment_start,
            self.header_offset,
            self.count,
        )?;
        Ok(self.count)
    }
}

impl<S, HP, IP, FP> Drop for SegmentWriter<'_, S, HP, IP, FP>
where
    S: SegmentSink,
    FP: FinalizePolicy,
{
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        if let Err(error) = FP::write(
            self.sink,
            self.segment_start,
            self.header_offset,
            self.count,
        ) {
            tracing::error!(
                %error,
                segment_start = self.segment_start,
                count = self.count,
                "segment finalization failed during drop"
            );
        }
    }
}

impl<S, HP, IP, FP> std::fmt::Debug for SegmentWriter<'_, S, HP, IP, FP>
where
    S: SegmentSink,
    FP: FinalizePolicy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentWriter")
            .field("segment_start", &self.segment_start)
            .field("header_offset", &self.header_offset)
            .field("count", &self.count)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

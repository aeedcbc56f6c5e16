//! Stateless write policies for the three phases of segment writing.
//!
//! A policy is a pure function over `(data, sink, segment offsets, running
//! count)`. Policies hold no state and are implemented on zero-sized marker
//! types, so a fully composed [`crate::SegmentWriter`] dispatches them
//! statically with no runtime cost, and an incompatible composition fails to
//! compile.

use crate::error::{SegmentError, SegmentResult};
use crate::record::FlatRecord;
use waymark_sink::SegmentSink;

/// Byte width of the reserved count field written by [`CountPrefixHeader`]
/// and backpatched by [`CountPrefixFinalize`].
pub const COUNT_PREFIX_SIZE: usize = std::mem::size_of::<u32>();

/// Policy for the header phase, invoked once when a segment is opened.
pub trait HeaderPolicy<H> {
    /// Writes the segment header.
    ///
    /// Returns the byte span logically reserved for later backpatching.
    /// This is not necessarily the number of bytes physically written:
    /// [`CountPrefixHeader`] writes four placeholder bytes but returns 0 so
    /// that the finalizer's patch target stays at the start of the reserved
    /// field.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    fn write<S: SegmentSink>(
        header: &H,
        sink: &mut S,
        segment_start: u64,
        count: u64,
    ) -> SegmentResult<u64>;
}

/// Policy for the item phase, invoked once per record.
pub trait ItemPolicy<T> {
    /// Writes one item.
    ///
    /// Returns the count increment (0 or 1). The count is a *record* count,
    /// never a byte count, regardless of the item's size.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    fn write<S: SegmentSink>(
        item: &T,
        sink: &mut S,
        segment_start: u64,
        header_offset: u64,
        count: u64,
    ) -> SegmentResult<u64>;
}

/// Policy for the finalize phase, invoked exactly once when the segment is
/// closed.
pub trait FinalizePolicy {
    /// Finalizes the segment.
    ///
    /// This is the only phase permitted to touch bytes behind the append
    /// position, and it must leave the sink's append position unchanged so
    /// the next segment continues contiguously.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails or the count cannot be
    /// represented in the reserved field.
    fn write<S: SegmentSink>(
        sink: &mut S,
        segment_start: u64,
        header_offset: u64,
        count: u64,
    ) -> SegmentResult<u64>;
}

/// Header policy that writes nothing.
#[derive(Debug, Clone, Copy)]
pub struct NoHeader;

impl<H> HeaderPolicy<H> for NoHeader {
    fn write<S: SegmentSink>(_: &H, _: &mut S, _: u64, _: u64) -> SegmentResult<u64> {
        Ok(0)
    }
}

/// Item policy that writes nothing and never advances the count.
#[derive(Debug, Clone, Copy)]
pub struct NoItem;

impl<T> ItemPolicy<T> for NoItem {
    fn write<S: SegmentSink>(_: &T, _: &mut S, _: u64, _: u64, _: u64) -> SegmentResult<u64> {
        Ok(0)
    }
}

/// Finalize policy that does nothing.
#[derive(Debug, Clone, Copy)]
pub struct NoFinalize;

impl FinalizePolicy for NoFinalize {
    fn write<S: SegmentSink>(_: &mut S, _: u64, _: u64, _: u64) -> SegmentResult<u64> {
        Ok(0)
    }
}

/// Header policy that writes the header's full byte image.
///
/// Returns the header's size as the reserved span. No provided finalizer
/// patches behind a trivial header, so the value is informative only.
#[derive(Debug, Clone, Copy)]
pub struct TrivialHeader;

impl<H: FlatRecord> HeaderPolicy<H> for TrivialHeader {
    fn write<S: SegmentSink>(header: &H, sink: &mut S, _: u64, _: u64) -> SegmentResult<u64> {
        sink.append(header.wire_bytes())?;
        Ok(H::WIRE_SIZE as u64)
    }
}

/// Item policy that writes the item's full byte image and counts it as one
/// record.
#[derive(Debug, Clone, Copy)]
pub struct TrivialItem;

impl<T: FlatRecord> ItemPolicy<T> for TrivialItem {
    fn write<S: SegmentSink>(item: &T, sink: &mut S, _: u64, _: u64, _: u64) -> SegmentResult<u64> {
        sink.append(item.wire_bytes())?;
        Ok(1)
    }
}

/// Header policy that reserves a 32-bit count field.
///
/// The header argument is ignored; the placeholder is always a host-order
/// zero. Returns 0 so the reserved field itself is the finalizer's patch
/// target.
#[derive(Debug, Clone, Copy)]
pub struct CountPrefixHeader;

impl<H> HeaderPolicy<H> for CountPrefixHeader {
    fn write<S: SegmentSink>(_: &H, sink: &mut S, _: u64, _: u64) -> SegmentResult<u64> {
        sink.append(&0u32.to_ne_bytes())?;
        Ok(0)
    }
}

/// Finalize policy that backpatches the reserved count field with the final
/// record count.
///
/// The count is written as a host-order `u32` at
/// `segment_start + header_offset`. A count that does not fit 32 bits fails
/// with [`SegmentError::CountOverflow`] and leaves the placeholder
/// untouched; the field is never silently truncated.
#[derive(Debug, Clone, Copy)]
pub struct CountPrefixFinalize;

impl FinalizePolicy for CountPrefixFinalize {
    fn write<S: SegmentSink>(
        sink: &mut S,
        segment_start: u64,
        header_offset: u64,
        count: u64,
    ) -> SegmentResult<u64> {
        let prefix =
            u32::try_from(count).map_err(|_| SegmentError::CountOverflow { count })?;

        let field_offset = segment_start + header_offset;
        sink.patch_at(field_offset, &prefix.to_ne_bytes())?;

        tracing::trace!(field_offset, count, "backpatched segment count");
        Ok(1)
    }
}

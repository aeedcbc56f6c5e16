//! Flat record capability.

pub use bytemuck::{Pod, Zeroable};

/// A fixed-size value type whose in-memory representation is its wire
/// representation.
///
/// Segments store records verbatim: no field-by-field encoding, no length
/// headers per record, no endianness conversion. That is only sound for
/// types with a fixed, fully initialized byte image - no padding holes, no
/// pointers, no interior references. The [`bytemuck::Pod`] bound enforces
/// exactly that at compile time, so a non-flat type is rejected before it
/// ever reaches the item-write path.
///
/// The trait is blanket-implemented for every `Pod` type; derive
/// [`Pod`] and [`Zeroable`] on a `#[repr(C)]` struct to opt a record in:
///
/// ```rust
/// use waymark_segment::{FlatRecord, Pod, Zeroable};
///
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// #[repr(C)]
/// struct NodeRecord {
///     id: u64,
///     latitude: i32,
///     longitude: i32,
/// }
///
/// assert_eq!(NodeRecord::WIRE_SIZE, 16);
/// ```
pub trait FlatRecord: Pod {
    /// Number of bytes this record occupies on the wire.
    const WIRE_SIZE: usize = std::mem::size_of::<Self>();

    /// Returns the record's byte image, exactly as it will appear in the
    /// output.
    fn wire_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl<T: Pod> FlatRecord for T {}

//! # Waymark Segment
//!
//! Policy-driven length-framed segment writing for routing-graph data files.
//!
//! This crate serializes fixed-layout records (headers, edges, nodes) into
//! contiguous **segments** on a [`waymark_sink::SegmentSink`]. A segment is
//! written in one forward pass: the writer never buffers records, and the
//! only corrective write is a single backpatch of a reserved count field
//! during finalization.
//!
//! ## Design Principles
//!
//! - Segment writing is composed from three **stateless policies** (header,
//!   item, finalize), bound as type parameters and dispatched statically
//! - Record types must be [`FlatRecord`]: their in-memory layout *is* their
//!   wire layout, guaranteed at compile time via [`bytemuck::Pod`]
//! - Every sink fault and count overflow surfaces as an explicit error
//!
//! ## Portability
//!
//! Records and count prefixes are written in the host's in-memory
//! representation. The produced files are not portable across hosts with
//! differing byte order or record layouts; readers are expected to be built
//! from the same record definitions.
//!
//! ## Example
//!
//! ```rust
//! use waymark_segment::{EdgeWriter, Pod, Zeroable};
//! use waymark_sink::{MemorySink, SegmentSink};
//!
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! #[repr(C)]
//! struct Edge {
//!     source: u32,
//!     target: u32,
//! }
//!
//! let mut sink = MemorySink::new();
//! let mut writer = EdgeWriter::new(&mut sink, &()).unwrap();
//! writer.write(&Edge { source: 1, target: 2 }).unwrap();
//! writer.write(&Edge { source: 2, target: 3 }).unwrap();
//! let count = writer.finish().unwrap();
//!
//! assert_eq!(count, 2);
//! assert_eq!(sink.position(), 4 + 2 * 8);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod policy;
mod record;
mod writer;
mod writers;

pub use error::{SegmentError, SegmentResult};
pub use policy::{
    CountPrefixFinalize, CountPrefixHeader, FinalizePolicy, HeaderPolicy, ItemPolicy, NoFinalize,
    NoHeader, NoItem, TrivialHeader, TrivialItem, COUNT_PREFIX_SIZE,
};
pub use record::{FlatRecord, Pod, Zeroable};
pub use writer::SegmentWriter;
pub use writers::{EdgeWriter, HeaderWriter, NodeWriter};

//! # Waymark Sink
//!
//! Output sink abstraction for waymark segment writing.
//!
//! This crate provides the lowest-level output abstraction for waymark.
//! Sinks are **opaque byte sinks** - they do not interpret the segments
//! written through them.
//!
//! ## Design Principles
//!
//! - Sinks are append-oriented: the write position only moves forward
//! - The single exception is [`SegmentSink::patch_at`], which corrects
//!   previously appended bytes in place without moving the append position
//! - Segment framing and record layout are owned by `waymark_segment`
//!
//! ## Available Sinks
//!
//! - [`MemorySink`] - For testing and ephemeral output
//! - [`FileSink`] - For writing data files using OS file APIs
//!
//! ## Example
//!
//! ```rust
//! use waymark_sink::{MemorySink, SegmentSink};
//!
//! let mut sink = MemorySink::new();
//! let offset = sink.append(b"hello world").unwrap();
//! assert_eq!(offset, 0);
//! sink.patch_at(0, b"H").unwrap();
//! assert_eq!(&sink.data()[..5], b"Hello");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod file;
mod memory;
mod sink;

pub use error::{SinkError, SinkResult};
pub use file::FileSink;
pub use memory::MemorySink;
pub use sink::SegmentSink;

//! Pre-composed writers for the routing-graph file format.

use crate::policy::{
    CountPrefixFinalize, CountPrefixHeader, NoFinalize, NoItem, TrivialHeader, TrivialItem,
};
use crate::writer::SegmentWriter;

/// Writes exactly one fixed header record and nothing else.
///
/// No count prefix, no items, no finalization. Used for the file's leading
/// fingerprint/header segment.
pub type HeaderWriter<'a, S> = SegmentWriter<'a, S, TrivialHeader, NoItem, NoFinalize>;

/// Writes a count-prefixed run of edge records.
///
/// Reserves a 4-byte count field, appends each record verbatim, and
/// backpatches the field with the final record count on finish.
pub type EdgeWriter<'a, S> =
    SegmentWriter<'a, S, CountPrefixHeader, TrivialItem, CountPrefixFinalize>;

/// Writes a count-prefixed run of node records.
///
/// Same framing as [`EdgeWriter`]; the alias exists because edges and nodes
/// are distinct record kinds in the file format.
pub type NodeWriter<'a, S> =
    SegmentWriter<'a, S, CountPrefixHeader, TrivialItem, CountPrefixFinalize>;

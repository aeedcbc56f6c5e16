//! Benchmark utilities for waymark.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use rand::Rng;
use waymark_segment::{Pod, Zeroable};

/// A representative edge record, 16 bytes.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct BenchEdge {
    /// Source node index.
    pub source: u32,
    /// Target node index.
    pub target: u32,
    /// Traversal weight.
    pub weight: u32,
    /// Direction and access flags.
    pub flags: u32,
}

/// Generates `count` random edge records.
pub fn random_edges(count: usize) -> Vec<BenchEdge> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| BenchEdge {
            source: rng.gen(),
            target: rng.gen(),
            weight: rng.gen(),
            flags: rng.gen(),
        })
        .collect()
}

//! End-to-end tests for segment streams across sinks.

use proptest::prelude::*;
use waymark_segment::{EdgeWriter, HeaderWriter, NodeWriter, Pod, Zeroable};
use waymark_sink::{FileSink, MemorySink, SegmentSink};

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
struct FileHeader {
    magic: [u8; 4],
    version: u32,
    flags: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
struct Edge {
    source: u32,
    target: u32,
    weight: u32,
    flags: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
struct Node {
    id: u64,
    latitude: i32,
    longitude: i32,
}

const HEADER: FileHeader = FileHeader {
    magic: *b"WAYM",
    version: 3,
    flags: 0,
};

/// Writes a full file image: header segment, edge segment, node segment.
fn write_graph_file<S: SegmentSink>(
    sink: &mut S,
    edges: &[Edge],
    nodes: &[Node],
) -> (u64, u64) {
    let writer = HeaderWriter::new(sink, &HEADER).unwrap();
    writer.finish().unwrap();

    let mut writer = EdgeWriter::new(sink, &()).unwrap();
    for edge in edges {
        writer.write(edge).unwrap();
    }
    let edge_count = writer.finish().unwrap();

    let mut writer = NodeWriter::new(sink, &()).unwrap();
    for node in nodes {
        writer.write(node).unwrap();
    }
    let node_count = writer.finish().unwrap();

    (edge_count, node_count)
}

#[test]
fn full_file_layout_is_contiguous() {
    let edges = [
        Edge {
            source: 0,
            target: 1,
            weight: 10,
            flags: 0,
        },
        Edge {
            source: 1,
            target: 2,
            weight: 25,
            flags: 1,
        },
    ];
    let nodes = [Node {
        id: 42,
        latitude: 52_520_008,
        longitude: 13_404_954,
    }];

    let mut sink = MemorySink::new();
    let (edge_count, node_count) = write_graph_file(&mut sink, &edges, &nodes);
    assert_eq!(edge_count, 2);
    assert_eq!(node_count, 1);

    let data = sink.data();
    let header_size = std::mem::size_of::<FileHeader>();
    let edge_size = std::mem::size_of::<Edge>();
    let node_size = std::mem::size_of::<Node>();

    assert_eq!(
        data.len(),
        header_size + (4 + 2 * edge_size) + (4 + node_size)
    );

    let mut at = 0;
    assert_eq!(&data[at..at + header_size], bytemuck::bytes_of(&HEADER));
    at += header_size;

    assert_eq!(&data[at..at + 4], &2u32.to_ne_bytes());
    at += 4;
    for edge in &edges {
        assert_eq!(&data[at..at + edge_size], bytemuck::bytes_of(edge));
        at += edge_size;
    }

    assert_eq!(&data[at..at + 4], &1u32.to_ne_bytes());
    at += 4;
    assert_eq!(&data[at..at + node_size], bytemuck::bytes_of(&nodes[0]));
}

#[test]
fn file_sink_produces_the_same_bytes_as_memory() {
    let edges: Vec<Edge> = (0..17)
        .map(|i| Edge {
            source: i,
            target: i + 1,
            weight: i * 3,
            flags: 0,
        })
        .collect();
    let nodes: Vec<Node> = (0..9u32)
        .map(|i| Node {
            id: u64::from(i),
            latitude: -(i as i32),
            longitude: (i as i32) * 2,
        })
        .collect();

    let mut memory = MemorySink::new();
    write_graph_file(&mut memory, &edges, &nodes);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.bin");
    let mut file = FileSink::create(&path).unwrap();
    write_graph_file(&mut file, &edges, &nodes);
    file.sync().unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), memory.data());
}

#[test]
fn empty_file_still_frames_every_segment() {
    let mut sink = MemorySink::new();
    write_graph_file(&mut sink, &[], &[]);

    let header_size = std::mem::size_of::<FileHeader>();
    let data = sink.data();
    assert_eq!(data.len(), header_size + 4 + 4);
    assert_eq!(&data[header_size..header_size + 4], &0u32.to_ne_bytes());
    assert_eq!(&data[header_size + 4..], &0u32.to_ne_bytes());
}

fn edge_strategy() -> impl Strategy<Value = Edge> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<u32>()).prop_map(
        |(source, target, weight, flags)| Edge {
            source,
            target,
            weight,
            flags,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn count_prefixed_layout_holds_for_arbitrary_edges(
        edges in prop::collection::vec(edge_strategy(), 0..64)
    ) {
        let mut sink = MemorySink::new();

        let mut writer = EdgeWriter::new(&mut sink, &()).unwrap();
        for edge in &edges {
            writer.write(edge).unwrap();
        }
        let count = writer.finish().unwrap();

        prop_assert_eq!(count, edges.len() as u64);

        let data = sink.data();
        let edge_size = std::mem::size_of::<Edge>();
        prop_assert_eq!(data.len(), 4 + edges.len() * edge_size);
        prop_assert_eq!(&data[..4], &(edges.len() as u32).to_ne_bytes());

        for (i, edge) in edges.iter().enumerate() {
            let at = 4 + i * edge_size;
            prop_assert_eq!(&data[at..at + edge_size], bytemuck::bytes_of(edge));
        }
    }

    #[test]
    fn back_to_back_segments_never_overlap(
        first in prop::collection::vec(edge_strategy(), 0..16),
        second in prop::collection::vec(edge_strategy(), 0..16),
    ) {
        let mut sink = MemorySink::new();

        let mut writer = EdgeWriter::new(&mut sink, &()).unwrap();
        for edge in &first {
            writer.write(edge).unwrap();
        }
        writer.finish().unwrap();
        let boundary = sink.position() as usize;

        let mut writer = EdgeWriter::new(&mut sink, &()).unwrap();
        for edge in &second {
            writer.write(edge).unwrap();
        }
        writer.finish().unwrap();

        let edge_size = std::mem::size_of::<Edge>();
        prop_assert_eq!(boundary, 4 + first.len() * edge_size);

        let data = sink.data();
        prop_assert_eq!(data.len(), boundary + 4 + second.len() * edge_size);
        prop_assert_eq!(&data[..4], &(first.len() as u32).to_ne_bytes());
        prop_assert_eq!(
            &data[boundary..boundary + 4],
            &(second.len() as u32).to_ne_bytes()
        );
    }
}

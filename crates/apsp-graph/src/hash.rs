use apsp_core::WeightedDigraph;
use sha2::{Digest, Sha256};

use crate::digraph::DiGraph;

/// Computes the canonical structural hash for the provided graph.
///
/// The digest covers the vertex count and every edge in insertion order, so
/// parallel edges and their order are part of a graph's identity.
pub fn canonical_hash(graph: &DiGraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"apsp-digraph");
    hasher.update((graph.vertex_count() as u64).to_le_bytes());
    hasher.update((graph.edge_count() as u64).to_le_bytes());
    for edge in graph.edge_list() {
        hasher.update(edge.from.as_raw().to_le_bytes());
        hasher.update(edge.to.as_raw().to_le_bytes());
        hasher.update(edge.weight.to_bits().to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

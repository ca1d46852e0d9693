#![deny(missing_docs)]

//! Validated directed weighted graphs implementing the `apsp-core` contracts.
//!
//! [`DiGraph`] owns the vertex count and edge list and exposes an adjacency
//! view. [`AugmentedGraph`] adds the synthetic source used to compute vertex
//! potentials without mutating or copying the wrapped graph.

mod augmented;
mod digraph;
mod generators;
mod hash;
mod serialization;

pub use augmented::AugmentedGraph;
pub use digraph::{DiGraph, MAX_VERTICES};
pub use generators::{gen_potential_digraph, gen_random_digraph};
pub use hash::canonical_hash;

/// Re-export serialization helpers for downstream crates.
pub use serialization::{
    graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json, GRAPH_SCHEMA,
};

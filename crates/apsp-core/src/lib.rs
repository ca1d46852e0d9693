#![deny(missing_docs)]
#![doc = "Core contracts and data types shared by the APSP graph and path crates."]

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod matrix;
pub mod provenance;
pub mod rng;
mod types;

pub use errors::{ApspError, ErrorInfo};
pub use matrix::{walk_predecessors, DistanceMatrix, PredecessorMatrix};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{stream_seed, RngHandle};
pub use types::{Distance, UNREACHABLE_TAG};

/// Identifier for a vertex; vertices are numbered `0..vertex_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    /// Creates an identifier from an array index.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the identifier as an array index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Directed edge `from -> to` carrying a signed weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// Tail of the edge.
    pub from: VertexId,
    /// Head of the edge.
    pub to: VertexId,
    /// Signed edge weight.
    pub weight: f64,
}

impl WeightedEdge {
    /// Creates an edge from raw vertex indices.
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self {
            from: VertexId::from_index(from),
            to: VertexId::from_index(to),
            weight,
        }
    }
}

/// Read-only adjacency contract consumed by the shortest path phases.
///
/// Every edge returned by an implementation has both endpoints in
/// `0..vertex_count()`.
pub trait WeightedDigraph: Send + Sync {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all edges.
    fn edges(&self) -> Box<dyn Iterator<Item = WeightedEdge> + '_>;

    /// Returns an iterator over the edges leaving `vertex`.
    fn out_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_>;

    /// Returns whether `vertex` is a vertex of this graph.
    fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertex_count()
    }
}

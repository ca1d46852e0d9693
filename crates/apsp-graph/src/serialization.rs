use apsp_core::errors::{ApspError, ErrorInfo};
use apsp_core::provenance::SchemaVersion;
use apsp_core::WeightedDigraph;
use serde::{Deserialize, Serialize};

use crate::digraph::DiGraph;

/// Schema version written into serialized graphs.
pub const GRAPH_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &DiGraph) -> Result<Vec<u8>, ApspError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| ApspError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<DiGraph, ApspError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| ApspError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &DiGraph) -> Result<String, ApspError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| ApspError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
///
/// The payload is validated exactly like [`DiGraph::new`] input.
pub fn graph_from_json(json: &str) -> Result<DiGraph, ApspError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| ApspError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    schema_version: SchemaVersion,
    vertex_count: u64,
    edges: Vec<SerializableEdge>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SerializableEdge {
    from: u64,
    to: u64,
    weight: f64,
}

impl SerializableGraph {
    fn from_graph(graph: &DiGraph) -> Self {
        let edges = graph
            .edges()
            .map(|edge| SerializableEdge {
                from: u64::from(edge.from.as_raw()),
                to: u64::from(edge.to.as_raw()),
                weight: edge.weight,
            })
            .collect();
        Self {
            schema_version: GRAPH_SCHEMA,
            vertex_count: graph.vertex_count() as u64,
            edges,
        }
    }

    fn into_graph(self) -> Result<DiGraph, ApspError> {
        if self.schema_version.major != GRAPH_SCHEMA.major {
            return Err(ApspError::Serde(
                ErrorInfo::new("schema-mismatch", "unsupported graph schema version")
                    .with_context("found", self.schema_version.major)
                    .with_context("expected", GRAPH_SCHEMA.major),
            ));
        }
        let triples: Vec<(usize, usize, f64)> = self
            .edges
            .iter()
            .map(|edge| (edge.from as usize, edge.to as usize, edge.weight))
            .collect();
        DiGraph::from_triples(self.vertex_count as usize, &triples)
    }
}

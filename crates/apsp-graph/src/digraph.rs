use apsp_core::errors::{ApspError, ErrorInfo, EMPTY_GRAPH, NON_FINITE_WEIGHT};
use apsp_core::{VertexId, WeightedDigraph, WeightedEdge};

use crate::augmented::AugmentedGraph;

/// Largest vertex count accepted, leaving room for the synthetic source index.
pub const MAX_VERTICES: usize = u32::MAX as usize - 1;

/// Immutable directed graph with signed edge weights.
///
/// Edges are kept in insertion order; parallel edges and self-loops are stored
/// as given. Outgoing adjacency is a compressed sparse row index into the edge
/// list, built once at construction.
#[derive(Debug, Clone)]
pub struct DiGraph {
    vertex_count: usize,
    edges: Vec<WeightedEdge>,
    offsets: Vec<usize>,
    adjacency: Vec<usize>,
}

impl DiGraph {
    /// Builds a graph from `vertex_count` vertices and the provided edges.
    ///
    /// Fails with `invalid-edge` when an endpoint lies outside `0..vertex_count`
    /// and with `non-finite-weight` for NaN or infinite weights.
    pub fn new(
        vertex_count: usize,
        edges: impl IntoIterator<Item = WeightedEdge>,
    ) -> Result<Self, ApspError> {
        ensure_vertex_count(vertex_count)?;
        let edges: Vec<WeightedEdge> = edges.into_iter().collect();
        for (index, edge) in edges.iter().enumerate() {
            if edge.from.index() >= vertex_count || edge.to.index() >= vertex_count {
                return Err(ApspError::invalid_edge(
                    index,
                    edge.from.index(),
                    edge.to.index(),
                    vertex_count,
                ));
            }
            ensure_finite(index, edge.weight)?;
        }
        Ok(Self::assemble(vertex_count, edges))
    }

    /// Builds a graph from raw `(from, to, weight)` triples.
    pub fn from_triples(
        vertex_count: usize,
        triples: &[(usize, usize, f64)],
    ) -> Result<Self, ApspError> {
        ensure_vertex_count(vertex_count)?;
        for (index, &(from, to, _)) in triples.iter().enumerate() {
            if from >= vertex_count || to >= vertex_count {
                return Err(ApspError::invalid_edge(index, from, to, vertex_count));
            }
        }
        Self::new(
            vertex_count,
            triples
                .iter()
                .map(|&(from, to, weight)| WeightedEdge::new(from, to, weight)),
        )
    }

    fn assemble(vertex_count: usize, edges: Vec<WeightedEdge>) -> Self {
        let mut offsets = vec![0usize; vertex_count + 1];
        for edge in &edges {
            offsets[edge.from.index() + 1] += 1;
        }
        for idx in 0..vertex_count {
            offsets[idx + 1] += offsets[idx];
        }
        let mut cursor = offsets.clone();
        let mut adjacency = vec![0usize; edges.len()];
        for (index, edge) in edges.iter().enumerate() {
            let slot = &mut cursor[edge.from.index()];
            adjacency[*slot] = index;
            *slot += 1;
        }
        Self {
            vertex_count,
            edges,
            offsets,
            adjacency,
        }
    }

    /// Returns the stored edges in insertion order.
    pub fn edge_list(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Returns the out-degree of `vertex`.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize, ApspError> {
        self.ensure_vertex(vertex)?;
        let idx = vertex.index();
        Ok(self.offsets[idx + 1] - self.offsets[idx])
    }

    /// Returns an error unless `vertex` belongs to this graph.
    pub fn ensure_vertex(&self, vertex: VertexId) -> Result<(), ApspError> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(ApspError::invalid_vertex(vertex.index(), self.vertex_count))
        }
    }

    /// Returns a graph with identical structure whose weights are `weight(edge)`.
    ///
    /// The adjacency index is reused, so edge order and multi-edges are preserved
    /// exactly. The first error returned by `weight` is propagated, and mapped
    /// weights go through the same `non-finite-weight` check as [`DiGraph::new`].
    pub fn map_weights<F>(&self, mut weight: F) -> Result<DiGraph, ApspError>
    where
        F: FnMut(&WeightedEdge) -> Result<f64, ApspError>,
    {
        let mut edges = Vec::with_capacity(self.edges.len());
        for (index, edge) in self.edges.iter().enumerate() {
            let mapped = weight(edge)?;
            ensure_finite(index, mapped)?;
            edges.push(WeightedEdge {
                weight: mapped,
                ..*edge
            });
        }
        Ok(DiGraph {
            vertex_count: self.vertex_count,
            edges,
            offsets: self.offsets.clone(),
            adjacency: self.adjacency.clone(),
        })
    }

    /// Returns a view of this graph extended with one synthetic source vertex.
    ///
    /// The graph itself is borrowed and left untouched.
    pub fn with_synthetic_source(&self) -> AugmentedGraph<'_> {
        AugmentedGraph::new(self)
    }

    /// Returns whether any edge carries a negative weight.
    pub fn has_negative_weights(&self) -> bool {
        self.edges.iter().any(|edge| edge.weight < 0.0)
    }

    pub(crate) fn out_edge_slice(
        &self,
        vertex: VertexId,
    ) -> impl Iterator<Item = WeightedEdge> + '_ {
        let idx = vertex.index();
        let range = if idx < self.vertex_count {
            self.offsets[idx]..self.offsets[idx + 1]
        } else {
            0..0
        };
        self.adjacency[range].iter().map(|&edge| self.edges[edge])
    }
}

impl WeightedDigraph for DiGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn out_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        Box::new(self.out_edge_slice(vertex))
    }
}

fn ensure_vertex_count(vertex_count: usize) -> Result<(), ApspError> {
    if vertex_count == 0 {
        return Err(ApspError::Graph(ErrorInfo::new(
            EMPTY_GRAPH,
            "graph requires at least one vertex",
        )));
    }
    if vertex_count > MAX_VERTICES {
        return Err(ApspError::Graph(
            ErrorInfo::new("too-many-vertices", "vertex count exceeds the supported range")
                .with_context("vertex_count", vertex_count)
                .with_context("max", MAX_VERTICES),
        ));
    }
    Ok(())
}

fn ensure_finite(index: usize, weight: f64) -> Result<(), ApspError> {
    if weight.is_finite() {
        return Ok(());
    }
    Err(ApspError::Graph(
        ErrorInfo::new(NON_FINITE_WEIGHT, "edge weight must be a finite number")
            .with_context("edge", index)
            .with_context("weight", weight),
    ))
}

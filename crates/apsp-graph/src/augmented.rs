use apsp_core::{VertexId, WeightedDigraph, WeightedEdge};

use crate::digraph::DiGraph;

/// A [`DiGraph`] extended with one synthetic source vertex.
///
/// The synthetic vertex has index `base.vertex_count()` and a zero-weight edge
/// to every real vertex. Its edges are produced on demand; the base graph is
/// only borrowed.
#[derive(Debug, Clone, Copy)]
pub struct AugmentedGraph<'g> {
    base: &'g DiGraph,
}

impl<'g> AugmentedGraph<'g> {
    pub(crate) fn new(base: &'g DiGraph) -> Self {
        Self { base }
    }

    /// Returns the wrapped graph.
    pub fn base(&self) -> &'g DiGraph {
        self.base
    }

    /// Returns the number of real (non-synthetic) vertices.
    pub fn real_vertex_count(&self) -> usize {
        self.base.vertex_count()
    }

    /// Returns the identifier of the synthetic source.
    pub fn synthetic(&self) -> VertexId {
        VertexId::from_index(self.base.vertex_count())
    }

    /// Returns whether `vertex` is the synthetic source.
    pub fn is_synthetic(&self, vertex: VertexId) -> bool {
        vertex == self.synthetic()
    }

    fn synthetic_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        let source = self.synthetic();
        (0..self.real_vertex_count()).map(move |target| WeightedEdge {
            from: source,
            to: VertexId::from_index(target),
            weight: 0.0,
        })
    }
}

impl WeightedDigraph for AugmentedGraph<'_> {
    fn vertex_count(&self) -> usize {
        self.base.vertex_count() + 1
    }

    fn edge_count(&self) -> usize {
        self.base.edge_count() + self.real_vertex_count()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        Box::new(self.base.edges().chain(self.synthetic_edges()))
    }

    fn out_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        if self.is_synthetic(vertex) {
            Box::new(self.synthetic_edges())
        } else {
            Box::new(self.base.out_edge_slice(vertex))
        }
    }
}

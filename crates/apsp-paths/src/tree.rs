use apsp_core::{walk_predecessors, Distance, VertexId};

/// Distances and predecessor links computed from a single source.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    source: VertexId,
    dist: Vec<f64>,
    pred: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    pub(crate) fn new(source: VertexId, dist: Vec<f64>, pred: Vec<Option<VertexId>>) -> Self {
        Self { source, dist, pred }
    }

    /// Returns the vertex the tree was grown from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the number of vertices covered by the tree.
    pub fn vertex_count(&self) -> usize {
        self.dist.len()
    }

    /// Returns the shortest distance from the source to `target`.
    pub fn distance(&self, target: VertexId) -> Distance {
        self.dist
            .get(target.index())
            .map_or(Distance::Unreachable, |value| Distance::from_tentative(*value))
    }

    /// Returns the distance to every vertex, indexed by vertex.
    pub fn distances(&self) -> Vec<Distance> {
        self.dist.iter().map(|value| Distance::from_tentative(*value)).collect()
    }

    /// Returns the vertex preceding `target` on its shortest path.
    pub fn predecessor(&self, target: VertexId) -> Option<VertexId> {
        self.pred.get(target.index()).copied().flatten()
    }

    /// Returns the predecessor of every vertex, indexed by vertex.
    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.pred
    }

    /// Reconstructs the vertex sequence from the source to `target`.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        walk_predecessors(&self.pred, self.source, target)
    }

    pub(crate) fn raw(&self) -> &[f64] {
        &self.dist
    }

    pub(crate) fn into_parts(self) -> (Vec<f64>, Vec<Option<VertexId>>) {
        (self.dist, self.pred)
    }
}

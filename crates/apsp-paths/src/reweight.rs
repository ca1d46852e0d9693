//! Vertex potentials and the weight transform they induce.

use apsp_core::errors::ApspError;
use apsp_core::{VertexId, WeightedDigraph};
use apsp_graph::{AugmentedGraph, DiGraph};

use crate::bellman_ford::{bellman_ford, BellmanFordOpts};

/// One potential per real vertex, derived from the synthetic source distances.
///
/// The synthetic vertex's own entry is dropped on construction, so the vector
/// is always indexed by real vertices only.
#[derive(Debug, Clone, PartialEq)]
pub struct Potentials {
    values: Vec<f64>,
}

impl Potentials {
    /// Runs the relaxation phase from the synthetic source of `augmented`.
    ///
    /// Fails with [`ApspError::NegativeCycle`] when any negative cycle exists in
    /// the wrapped graph, since the synthetic source reaches every vertex.
    pub fn compute(
        augmented: &AugmentedGraph<'_>,
        opts: &BellmanFordOpts,
    ) -> Result<Self, ApspError> {
        let tree = bellman_ford(augmented, augmented.synthetic(), opts)?;
        let mut values = tree.into_parts().0;
        values.truncate(augmented.real_vertex_count());
        Ok(Self { values })
    }

    /// Returns the potential of a real vertex.
    pub fn get(&self, vertex: VertexId) -> f64 {
        self.values[vertex.index()]
    }

    /// Returns the number of real vertices covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no vertex is covered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the potentials indexed by vertex.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns whether every potential is zero, making reweighting a no-op.
    pub fn is_trivial(&self) -> bool {
        self.values.iter().all(|value| *value == 0.0)
    }

    /// Maps a reweighted `source -> target` distance back to the original weights.
    ///
    /// Fails with `distance-overflow` when the restored value is not finite.
    pub fn restore(
        &self,
        source: VertexId,
        target: VertexId,
        reweighted: f64,
    ) -> Result<f64, ApspError> {
        let restored = reweighted - self.get(source) + self.get(target);
        if restored.is_finite() {
            Ok(restored)
        } else {
            Err(ApspError::distance_overflow(source.index(), target.index()))
        }
    }
}

/// Rewrites every edge `(u, v, w)` of `graph` to `(u, v, w + h[u] - h[v])`.
///
/// `potentials` must come from a relaxation run that found no negative cycle;
/// every rewritten weight is then non-negative. Rounding can leave a result a
/// few ulps below zero, which is clamped to `0.0`. A shifted weight outside the
/// finite `f64` range fails with `distance-overflow`.
pub fn reweight(graph: &DiGraph, potentials: &Potentials) -> Result<DiGraph, ApspError> {
    debug_assert_eq!(graph.vertex_count(), potentials.len());
    graph.map_weights(|edge| {
        let shifted = edge.weight + potentials.get(edge.from) - potentials.get(edge.to);
        if !shifted.is_finite() {
            return Err(ApspError::distance_overflow(edge.from.index(), edge.to.index()));
        }
        Ok(shifted.max(0.0))
    })
}

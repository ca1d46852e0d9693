use apsp_core::errors::ApspError;
use apsp_core::{VertexId, WeightedDigraph};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::tree::ShortestPathTree;

/// Options for the relaxation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BellmanFordOpts {
    /// Stop before `V - 1` passes once a full pass changes nothing.
    pub early_exit: bool,
}

impl Default for BellmanFordOpts {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

/// Computes shortest distances from `source`, tolerating negative weights.
///
/// Runs `V - 1` relaxation passes over every edge followed by one verification
/// pass. Any edge that still relaxes in the verification pass proves that a
/// negative cycle is reachable from `source`, and the call fails with
/// [`ApspError::NegativeCycle`]. Vertices not reachable from `source` keep an
/// unreachable distance and never act as relaxation candidates.
///
/// Fails with `distance-overflow` when a reachable distance cannot be held in a
/// finite `f64`.
pub fn bellman_ford<G>(
    graph: &G,
    source: VertexId,
    opts: &BellmanFordOpts,
) -> Result<ShortestPathTree, ApspError>
where
    G: WeightedDigraph + ?Sized,
{
    let n = graph.vertex_count();
    if !graph.contains(source) {
        return Err(ApspError::invalid_vertex(source.index(), n));
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<VertexId>> = vec![None; n];
    dist[source.index()] = 0.0;

    let mut converged = false;
    for pass in 0..n.saturating_sub(1) {
        let mut updated = false;
        for edge in graph.edges() {
            let from = dist[edge.from.index()];
            if !from.is_finite() {
                continue;
            }
            let candidate = from + edge.weight;
            if candidate == f64::NEG_INFINITY {
                return Err(ApspError::distance_overflow(edge.from.index(), edge.to.index()));
            }
            if candidate < dist[edge.to.index()] {
                dist[edge.to.index()] = candidate;
                pred[edge.to.index()] = Some(edge.from);
                updated = true;
            }
        }
        trace!(pass, updated, "relaxation pass");
        if !updated && opts.early_exit {
            converged = true;
            break;
        }
    }

    // A pass without updates already proves no edge can relax further.
    if !converged {
        for edge in graph.edges() {
            let from = dist[edge.from.index()];
            if from.is_finite() && from + edge.weight < dist[edge.to.index()] {
                warn!(
                    from = edge.from.as_raw(),
                    to = edge.to.as_raw(),
                    "negative cycle reachable from source"
                );
                return Err(ApspError::negative_cycle(edge.from.index(), edge.to.index()));
            }
        }
    }

    ensure_representable(graph, &dist)?;
    Ok(ShortestPathTree::new(source, dist, pred))
}

/// Fails when a settled tail leaves its head unreachable.
///
/// Any edge out of a reached vertex bounds the head's distance by a finite sum,
/// so an infinite head means that sum overflowed to `+inf`.
pub(crate) fn ensure_representable<G>(graph: &G, dist: &[f64]) -> Result<(), ApspError>
where
    G: WeightedDigraph + ?Sized,
{
    for edge in graph.edges() {
        if dist[edge.from.index()].is_finite() && !dist[edge.to.index()].is_finite() {
            return Err(ApspError::distance_overflow(edge.from.index(), edge.to.index()));
        }
    }
    Ok(())
}

//! All-pairs orchestration: potentials, reweighting, per-source searches.

use std::sync::atomic::{AtomicUsize, Ordering};

use apsp_core::errors::{ApspError, ErrorInfo};
use apsp_core::{Distance, DistanceMatrix, PredecessorMatrix, VertexId, WeightedDigraph};
use apsp_graph::DiGraph;
use rayon::prelude::*;
use tracing::debug;

use crate::cancel::CancelToken;
use crate::dijkstra::dijkstra;
use crate::opts::JohnsonOpts;
use crate::reweight::{reweight, Potentials};
use crate::tree::ShortestPathTree;

/// Progress of a [`Johnson`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Nothing computed yet.
    Init,
    /// The synthetic source view exists.
    Augmented,
    /// Potentials were derived without finding a negative cycle.
    PotentialsComputed,
    /// The run stopped with an error; no matrix exists.
    Failed,
    /// Per-source searches are running on the reweighted graph.
    PerSourceSearch,
    /// All rows are un-adjusted and assembled.
    Composed,
    /// The result was handed to the caller.
    Done,
}

/// Result of an all-pairs run.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairs {
    distances: DistanceMatrix,
    predecessors: Option<PredecessorMatrix>,
}

impl AllPairs {
    /// Returns the distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Returns the shortest distance from `source` to `target`.
    pub fn distance(&self, source: VertexId, target: VertexId) -> Distance {
        self.distances.get(source, target)
    }

    /// Returns predecessor rows when the run tracked paths.
    pub fn predecessors(&self) -> Option<&PredecessorMatrix> {
        self.predecessors.as_ref()
    }

    /// Reconstructs a shortest path; `None` when unreachable or paths were not tracked.
    pub fn path(&self, source: VertexId, target: VertexId) -> Option<Vec<VertexId>> {
        self.predecessors.as_ref()?.path(source, target)
    }

    /// Consumes the result, keeping only the distance matrix.
    pub fn into_distances(self) -> DistanceMatrix {
        self.distances
    }
}

struct SourceRow {
    distances: Vec<Distance>,
    predecessors: Option<Vec<Option<VertexId>>>,
}

/// Johnson's algorithm over a borrowed [`DiGraph`].
///
/// The caller's graph is never modified: the synthetic source lives in a view,
/// and the reweighted edge set is a scratch copy dropped when `run` returns.
#[derive(Debug)]
pub struct Johnson<'g> {
    graph: &'g DiGraph,
    opts: JohnsonOpts,
    cancel: CancelToken,
    stage: Stage,
}

impl<'g> Johnson<'g> {
    /// Prepares a run over `graph`.
    pub fn new(graph: &'g DiGraph, opts: JohnsonOpts) -> Self {
        Self {
            graph,
            opts,
            cancel: CancelToken::new(),
            stage: Stage::Init,
        }
    }

    /// Attaches a cancellation token checked before every per-source search.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns the stage reached by the most recent run.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Computes all-pairs shortest distances.
    ///
    /// Fails with [`ApspError::NegativeCycle`] when the graph contains any
    /// negative cycle; the check runs once, from the synthetic source, before
    /// any per-source search is launched.
    pub fn run(&mut self) -> Result<AllPairs, ApspError> {
        self.stage = Stage::Init;
        let outcome = self.execute();
        if outcome.is_err() {
            self.advance(Stage::Failed);
        }
        outcome
    }

    fn execute(&mut self) -> Result<AllPairs, ApspError> {
        let workers = self.opts.workers()?;
        let augmented = self.graph.with_synthetic_source();
        self.advance(Stage::Augmented);

        let potentials = Potentials::compute(&augmented, &self.opts.bellman_ford())?;
        self.advance(Stage::PotentialsComputed);

        let reweighted = reweight(self.graph, &potentials)?;
        self.advance(Stage::PerSourceSearch);
        let rows = self.search_all(&reweighted, &potentials, workers)?;

        let result = compose(rows)?;
        self.advance(Stage::Composed);
        self.advance(Stage::Done);
        Ok(result)
    }

    fn search_all(
        &self,
        reweighted: &DiGraph,
        potentials: &Potentials,
        workers: usize,
    ) -> Result<Vec<SourceRow>, ApspError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|err| ApspError::Config(ErrorInfo::new("thread-pool", err.to_string())))?;
        let completed = AtomicUsize::new(0);
        let track_paths = self.opts.track_paths;
        let cancel = &self.cancel;

        pool.install(|| {
            (0..reweighted.vertex_count())
                .into_par_iter()
                .map(|index| -> Result<SourceRow, ApspError> {
                    if cancel.is_cancelled() {
                        return Err(ApspError::cancelled(completed.load(Ordering::Relaxed)));
                    }
                    let source = VertexId::from_index(index);
                    let tree = dijkstra(reweighted, source)?;
                    let row = unadjust(tree, potentials, track_paths)?;
                    completed.fetch_add(1, Ordering::Relaxed);
                    Ok(row)
                })
                .collect()
        })
    }

    fn advance(&mut self, next: Stage) {
        debug!(
            from = ?self.stage,
            to = ?next,
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "johnson stage transition"
        );
        self.stage = next;
    }
}

/// Maps one reweighted search back to true distances.
fn unadjust(
    tree: ShortestPathTree,
    potentials: &Potentials,
    track_paths: bool,
) -> Result<SourceRow, ApspError> {
    let source = tree.source();
    let distances = tree
        .raw()
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let target = VertexId::from_index(index);
            if target == source {
                Ok(Distance::Finite(0.0))
            } else if raw.is_finite() {
                potentials.restore(source, target, *raw).map(Distance::Finite)
            } else {
                Ok(Distance::Unreachable)
            }
        })
        .collect::<Result<Vec<_>, ApspError>>()?;
    let predecessors = track_paths.then(|| tree.into_parts().1);
    Ok(SourceRow {
        distances,
        predecessors,
    })
}

fn compose(rows: Vec<SourceRow>) -> Result<AllPairs, ApspError> {
    let mut distance_rows = Vec::with_capacity(rows.len());
    let mut predecessor_rows = Vec::with_capacity(rows.len());
    let mut tracked = true;
    for row in rows {
        distance_rows.push(row.distances);
        match row.predecessors {
            Some(predecessors) => predecessor_rows.push(predecessors),
            None => tracked = false,
        }
    }
    Ok(AllPairs {
        distances: DistanceMatrix::from_rows(distance_rows)?,
        predecessors: tracked.then(|| PredecessorMatrix::from_rows(predecessor_rows)),
    })
}

/// Computes all-pairs shortest paths of `graph` with Johnson's algorithm.
#[tracing::instrument(
    skip(graph, opts),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count())
)]
pub fn johnson(graph: &DiGraph, opts: &JohnsonOpts) -> Result<AllPairs, ApspError> {
    Johnson::new(graph, opts.clone()).run()
}

/// Builds a graph from raw triples and returns its distance matrix.
///
/// Fails with `invalid-edge` for out-of-range endpoints and with
/// [`ApspError::NegativeCycle`] when no shortest distances exist.
pub fn shortest_distances(
    vertex_count: usize,
    triples: &[(usize, usize, f64)],
) -> Result<DistanceMatrix, ApspError> {
    let graph = DiGraph::from_triples(vertex_count, triples)?;
    Ok(johnson(&graph, &JohnsonOpts::default())?.into_distances())
}

use apsp_core::errors::{ApspError, ErrorInfo, EMPTY_GRAPH};
use apsp_core::rng::RngHandle;
use apsp_core::WeightedEdge;
use rand::Rng;

use crate::digraph::DiGraph;

/// Generates a random multigraph with integer weights in `0..=max_weight`.
///
/// Endpoints are drawn uniformly, so self-loops and parallel edges may appear.
pub fn gen_random_digraph(
    vertex_count: usize,
    edge_count: usize,
    max_weight: u32,
    rng: &mut RngHandle,
) -> Result<DiGraph, ApspError> {
    ensure_vertices(vertex_count)?;
    let edges: Vec<WeightedEdge> = (0..edge_count)
        .map(|_| sample_edge(vertex_count, max_weight, rng))
        .collect();
    DiGraph::new(vertex_count, edges)
}

/// Generates a random graph with negative weights but no negative cycle.
///
/// Each vertex draws a potential `p` in `0..=max_weight` and every edge weight
/// becomes `w + p[from] - p[to]` for a non-negative draw `w`. Potentials cancel
/// around any cycle, so every cycle keeps its non-negative original length.
pub fn gen_potential_digraph(
    vertex_count: usize,
    edge_count: usize,
    max_weight: u32,
    rng: &mut RngHandle,
) -> Result<DiGraph, ApspError> {
    ensure_vertices(vertex_count)?;
    let potentials: Vec<i64> = (0..vertex_count)
        .map(|_| i64::from(rng.gen_range(0..=max_weight)))
        .collect();
    let edges: Vec<WeightedEdge> = (0..edge_count)
        .map(|_| {
            let mut edge = sample_edge(vertex_count, max_weight, rng);
            let shift = potentials[edge.from.index()] - potentials[edge.to.index()];
            edge.weight += shift as f64;
            edge
        })
        .collect();
    DiGraph::new(vertex_count, edges)
}

fn sample_edge(vertex_count: usize, max_weight: u32, rng: &mut RngHandle) -> WeightedEdge {
    let from = rng.gen_range(0..vertex_count);
    let to = rng.gen_range(0..vertex_count);
    let weight = f64::from(rng.gen_range(0..=max_weight));
    WeightedEdge::new(from, to, weight)
}

fn ensure_vertices(vertex_count: usize) -> Result<(), ApspError> {
    if vertex_count == 0 {
        return Err(ApspError::Graph(ErrorInfo::new(
            EMPTY_GRAPH,
            "random generators require at least one vertex",
        )));
    }
    Ok(())
}

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use apsp_core::errors::ApspError;
use apsp_core::{VertexId, WeightedDigraph};

use crate::bellman_ford::ensure_representable;
use crate::tree::ShortestPathTree;

/// Min-priority container driving the search.
///
/// Implementations need no decrease-key: the search pushes a fresh entry on
/// every improvement and discards stale entries when they surface.
pub trait MinQueue {
    /// Inserts `vertex` with priority `key`.
    fn push(&mut self, vertex: VertexId, key: f64);

    /// Removes and returns an entry with the smallest key.
    fn pop_min(&mut self) -> Option<(VertexId, f64)>;

    /// Returns the number of queued entries.
    fn len(&self) -> usize;

    /// Returns true when no entry is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct HeapEntry {
    key: f64,
    vertex: VertexId,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the smallest key first.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary-heap backed [`MinQueue`] with lazy deletion.
#[derive(Debug, Default, Clone)]
pub struct BinaryHeapQueue {
    heap: BinaryHeap<HeapEntry>,
}

impl BinaryHeapQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }
}

impl MinQueue for BinaryHeapQueue {
    fn push(&mut self, vertex: VertexId, key: f64) {
        self.heap.push(HeapEntry { key, vertex });
    }

    fn pop_min(&mut self) -> Option<(VertexId, f64)> {
        self.heap.pop().map(|entry| (entry.vertex, entry.key))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Computes shortest distances from `source` over non-negative weights.
///
/// Every edge weight must be non-negative. The call does not check this: with
/// negative weights the returned distances are unspecified and may be wrong.
/// Fails with `distance-overflow` when a reachable distance exceeds the finite
/// `f64` range.
pub fn dijkstra<G>(graph: &G, source: VertexId) -> Result<ShortestPathTree, ApspError>
where
    G: WeightedDigraph + ?Sized,
{
    let queue = BinaryHeapQueue::with_capacity(graph.vertex_count());
    dijkstra_with_queue(graph, source, queue)
}

/// Runs the search of [`dijkstra`] with a caller-provided priority container.
pub fn dijkstra_with_queue<G, Q>(
    graph: &G,
    source: VertexId,
    mut queue: Q,
) -> Result<ShortestPathTree, ApspError>
where
    G: WeightedDigraph + ?Sized,
    Q: MinQueue,
{
    let n = graph.vertex_count();
    if !graph.contains(source) {
        return Err(ApspError::invalid_vertex(source.index(), n));
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<VertexId>> = vec![None; n];
    let mut settled = vec![false; n];
    dist[source.index()] = 0.0;
    queue.push(source, 0.0);

    while let Some((vertex, key)) = queue.pop_min() {
        let idx = vertex.index();
        if settled[idx] || key > dist[idx] {
            continue;
        }
        settled[idx] = true;
        for edge in graph.out_edges(vertex) {
            let target = edge.to.index();
            if settled[target] {
                continue;
            }
            let candidate = dist[idx] + edge.weight;
            if candidate < dist[target] {
                dist[target] = candidate;
                pred[target] = Some(vertex);
                queue.push(edge.to, candidate);
            }
        }
    }

    ensure_representable(graph, &dist)?;
    Ok(ShortestPathTree::new(source, dist, pred))
}

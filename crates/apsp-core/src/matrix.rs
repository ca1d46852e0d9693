//! Square result tables produced by all-pairs computations.

use serde::{Deserialize, Serialize};

use crate::errors::{ApspError, ErrorInfo};
use crate::types::Distance;
use crate::VertexId;

/// `V x V` table of shortest distances, stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct DistanceMatrix {
    vertex_count: usize,
    entries: Vec<Distance>,
}

#[derive(Deserialize)]
struct RawMatrix {
    vertex_count: usize,
    entries: Vec<Distance>,
}

impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = ApspError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        let expected = raw.vertex_count.checked_mul(raw.vertex_count);
        if expected != Some(raw.entries.len()) {
            return Err(ApspError::Serde(
                ErrorInfo::new("matrix-shape", "entry count does not match vertex count")
                    .with_context("vertex_count", raw.vertex_count)
                    .with_context("entries", raw.entries.len()),
            ));
        }
        Ok(Self {
            vertex_count: raw.vertex_count,
            entries: raw.entries,
        })
    }
}

impl DistanceMatrix {
    /// Assembles a matrix from one row per source vertex.
    pub fn from_rows(rows: Vec<Vec<Distance>>) -> Result<Self, ApspError> {
        let vertex_count = rows.len();
        let mut entries = Vec::with_capacity(vertex_count * vertex_count);
        for (source, row) in rows.into_iter().enumerate() {
            if row.len() != vertex_count {
                return Err(ApspError::Graph(
                    ErrorInfo::new("ragged-matrix", "distance row length differs from row count")
                        .with_context("row", source)
                        .with_context("len", row.len())
                        .with_context("expected", vertex_count),
                ));
            }
            entries.extend(row);
        }
        Ok(Self {
            vertex_count,
            entries,
        })
    }

    /// Returns the number of vertices (rows and columns).
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the distance from `source` to `target`.
    ///
    /// # Panics
    /// Panics when either vertex is outside the matrix.
    pub fn get(&self, source: VertexId, target: VertexId) -> Distance {
        self.row(source)[target.index()]
    }

    /// Returns the distance from `source` to `target`, or `None` when out of range.
    pub fn try_get(&self, source: VertexId, target: VertexId) -> Option<Distance> {
        if source.index() >= self.vertex_count || target.index() >= self.vertex_count {
            return None;
        }
        Some(self.get(source, target))
    }

    /// Returns all distances leaving `source`.
    pub fn row(&self, source: VertexId) -> &[Distance] {
        let start = source.index() * self.vertex_count;
        &self.entries[start..start + self.vertex_count]
    }

    /// Iterates over every `(source, target, distance)` triple in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, VertexId, Distance)> + '_ {
        let n = self.vertex_count;
        self.entries.iter().enumerate().map(move |(idx, distance)| {
            (
                VertexId::from_index(idx / n),
                VertexId::from_index(idx % n),
                *distance,
            )
        })
    }

    /// Returns the smallest finite distance between two distinct vertices.
    pub fn shortest_shortest_path(&self) -> Option<(VertexId, VertexId, f64)> {
        let mut best: Option<(VertexId, VertexId, f64)> = None;
        for (source, target, distance) in self.iter() {
            if source == target {
                continue;
            }
            let Some(value) = distance.finite() else {
                continue;
            };
            match best {
                Some((_, _, current)) if current <= value => {}
                _ => best = Some((source, target, value)),
            }
        }
        best
    }
}

/// Predecessor rows for every source, enabling path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredecessorMatrix {
    rows: Vec<Vec<Option<VertexId>>>,
}

impl PredecessorMatrix {
    /// Wraps one predecessor row per source vertex.
    pub fn from_rows(rows: Vec<Vec<Option<VertexId>>>) -> Self {
        Self { rows }
    }

    /// Returns the predecessor row of `source`.
    pub fn row(&self, source: VertexId) -> &[Option<VertexId>] {
        &self.rows[source.index()]
    }

    /// Reconstructs the vertex sequence of a shortest `source -> target` path.
    pub fn path(&self, source: VertexId, target: VertexId) -> Option<Vec<VertexId>> {
        let row = self.rows.get(source.index())?;
        walk_predecessors(row, source, target)
    }
}

/// Follows predecessor links back from `target` until `source` is reached.
///
/// Returns `None` when `target` is not connected to `source` through the links.
pub fn walk_predecessors(
    predecessors: &[Option<VertexId>],
    source: VertexId,
    target: VertexId,
) -> Option<Vec<VertexId>> {
    if target.index() >= predecessors.len() {
        return None;
    }
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        current = predecessors[current.index()]?;
        path.push(current);
        if path.len() > predecessors.len() {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

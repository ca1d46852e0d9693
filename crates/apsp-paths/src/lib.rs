#![deny(missing_docs)]

//! All-pairs shortest paths on directed graphs with signed edge weights.
//!
//! The pipeline follows Johnson's technique:
//!
//! 1. [`Potentials::compute`] runs [`bellman_ford`] once from a synthetic
//!    source joined to every vertex, failing with a negative-cycle error if
//!    shortest distances are undefined.
//! 2. [`reweight`] shifts every edge by `h[u] - h[v]`, leaving only
//!    non-negative weights while preserving which paths are shortest.
//! 3. [`dijkstra`] runs once per vertex on the reweighted graph, in parallel
//!    on a rayon pool, and each row is shifted back to true distances.
//!
//! [`johnson`] drives the whole pipeline; [`Johnson`] exposes the same run
//! with cancellation and stage inspection.

mod bellman_ford;
mod cancel;
mod dijkstra;
mod johnson;
mod opts;
mod report;
pub mod reweight;
mod tree;

pub use bellman_ford::{bellman_ford, BellmanFordOpts};
pub use cancel::CancelToken;
pub use dijkstra::{dijkstra, dijkstra_with_queue, BinaryHeapQueue, MinQueue};
pub use johnson::{johnson, shortest_distances, AllPairs, Johnson, Stage};
pub use opts::JohnsonOpts;
pub use report::{AllPairsReport, REPORT_SCHEMA};
pub use reweight::{reweight, Potentials};
pub use tree::ShortestPathTree;

use std::collections::BTreeMap;

use apsp_core::errors::{ApspError, ErrorInfo};
use apsp_core::provenance::{RunProvenance, SchemaVersion};
use apsp_core::{DistanceMatrix, WeightedDigraph};
use apsp_graph::{canonical_hash, DiGraph};
use serde::{Deserialize, Serialize};

use crate::johnson::AllPairs;
use crate::opts::JohnsonOpts;

/// Schema version written into serialized reports.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serializable record of an all-pairs run tied to the graph it was computed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllPairsReport {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// Graph hash, worker count and tool versions.
    pub provenance: RunProvenance,
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Shortest distances; unreachable entries serialize as `"unreachable"`.
    pub distances: DistanceMatrix,
}

impl AllPairsReport {
    /// Builds a report for `result`, computed on `graph` with `opts`.
    pub fn new(graph: &DiGraph, result: &AllPairs, opts: &JohnsonOpts) -> Result<Self, ApspError> {
        if result.distances().vertex_count() != graph.vertex_count() {
            return Err(ApspError::Graph(
                ErrorInfo::new("report-mismatch", "result does not belong to this graph")
                    .with_context("graph_vertices", graph.vertex_count())
                    .with_context("result_vertices", result.distances().vertex_count()),
            ));
        }
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        Ok(Self {
            schema_version: REPORT_SCHEMA,
            provenance: RunProvenance {
                graph_hash: canonical_hash(graph),
                workers: opts.workers()?,
                tool_versions,
            },
            vertex_count: graph.vertex_count(),
            distances: result.distances().clone(),
        })
    }

    /// Serializes the report to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ApspError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ApspError::Serde(ErrorInfo::new("serialize-report", err.to_string())))
    }

    /// Restores a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, ApspError> {
        serde_json::from_str(json)
            .map_err(|err| ApspError::Serde(ErrorInfo::new("deserialize-report", err.to_string())))
    }
}

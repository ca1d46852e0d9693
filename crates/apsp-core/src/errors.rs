//! Structured error types shared across APSP crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error code attached to edges whose endpoints fall outside the vertex range.
pub const INVALID_EDGE: &str = "invalid-edge";
/// Error code attached to edges carrying a NaN or infinite weight.
pub const NON_FINITE_WEIGHT: &str = "non-finite-weight";
/// Error code attached to graphs without any vertex.
pub const EMPTY_GRAPH: &str = "empty-graph";
/// Error code attached to source or target vertices outside the vertex range.
pub const INVALID_VERTEX: &str = "invalid-vertex";
/// Error code attached to a reachable negative-weight cycle.
pub const NEGATIVE_CYCLE: &str = "negative-cycle";
/// Error code attached to runs stopped through a cancellation token.
pub const CANCELLED: &str = "cancelled";
/// Error code attached to path lengths that leave the finite `f64` range.
pub const DISTANCE_OVERFLOW: &str = "distance-overflow";

/// Structured payload attached to every [`ApspError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (vertex indices, counts, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the shortest path engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ApspError {
    /// Graph construction and validation errors.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// A negative-weight cycle is reachable, so no distances are defined.
    #[error("negative cycle: {0}")]
    NegativeCycle(ErrorInfo),
    /// The computation was stopped through a cancellation token.
    #[error("cancelled: {0}")]
    Cancelled(ErrorInfo),
    /// Invalid run options or worker pool setup failures.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl ApspError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ApspError::Graph(info)
            | ApspError::NegativeCycle(info)
            | ApspError::Cancelled(info)
            | ApspError::Config(info)
            | ApspError::Serde(info) => info,
        }
    }

    /// Builds the error reported for an edge whose endpoint is out of range.
    pub fn invalid_edge(index: usize, from: usize, to: usize, vertex_count: usize) -> Self {
        ApspError::Graph(
            ErrorInfo::new(INVALID_EDGE, "edge endpoint outside the vertex range")
                .with_context("edge", index)
                .with_context("from", from)
                .with_context("to", to)
                .with_context("vertex_count", vertex_count),
        )
    }

    /// Builds the error reported for a vertex argument that is out of range.
    pub fn invalid_vertex(vertex: usize, vertex_count: usize) -> Self {
        ApspError::Graph(
            ErrorInfo::new(INVALID_VERTEX, "vertex outside the vertex range")
                .with_context("vertex", vertex)
                .with_context("vertex_count", vertex_count),
        )
    }

    /// Builds the error reported when an edge relaxes after the final pass.
    pub fn negative_cycle(from: usize, to: usize) -> Self {
        ApspError::NegativeCycle(
            ErrorInfo::new(NEGATIVE_CYCLE, "graph contains a reachable negative-weight cycle")
                .with_context("from", from)
                .with_context("to", to)
                .with_hint("no shortest distances exist while the cycle is present"),
        )
    }

    /// Builds the error reported when a distance along `from -> to` is not a finite `f64`.
    pub fn distance_overflow(from: usize, to: usize) -> Self {
        ApspError::Graph(
            ErrorInfo::new(DISTANCE_OVERFLOW, "path length exceeds the finite f64 range")
                .with_context("from", from)
                .with_context("to", to)
                .with_hint("scale edge weights down so that path sums stay finite"),
        )
    }

    /// Builds the error reported for a cancelled run.
    pub fn cancelled(completed_sources: usize) -> Self {
        ApspError::Cancelled(
            ErrorInfo::new(CANCELLED, "computation cancelled before completion")
                .with_context("completed_sources", completed_sources),
        )
    }

    /// Returns true when the error is a negative-cycle failure.
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, ApspError::NegativeCycle(_))
    }

    /// Returns true when a distance could not be represented as a finite `f64`.
    pub fn is_distance_overflow(&self) -> bool {
        matches!(self, ApspError::Graph(info) if info.code == DISTANCE_OVERFLOW)
    }

    /// Returns true when the error rejects an out-of-range edge.
    pub fn is_invalid_edge(&self) -> bool {
        matches!(self, ApspError::Graph(info) if info.code == INVALID_EDGE)
    }
}

use std::num::NonZeroUsize;
use std::thread;

use apsp_core::errors::{ApspError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::bellman_ford::BellmanFordOpts;

/// Options governing an all-pairs run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JohnsonOpts {
    /// Worker threads for the per-source searches; `None` uses available parallelism.
    pub concurrency: Option<usize>,
    /// Stop the relaxation phase once a pass changes nothing.
    pub early_exit: bool,
    /// Record predecessor rows so shortest paths can be reconstructed.
    pub track_paths: bool,
}

impl Default for JohnsonOpts {
    fn default() -> Self {
        Self {
            concurrency: None,
            early_exit: true,
            track_paths: false,
        }
    }
}

impl JohnsonOpts {
    /// Sequential options: a single worker thread.
    pub fn sequential() -> Self {
        Self {
            concurrency: Some(1),
            ..Self::default()
        }
    }

    /// Parses options from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ApspError> {
        let opts: Self = serde_json::from_str(json)
            .map_err(|err| ApspError::Serde(ErrorInfo::new("opts-json", err.to_string())))?;
        opts.workers()?;
        Ok(opts)
    }

    /// Resolves the worker count for the per-source phase.
    pub fn workers(&self) -> Result<usize, ApspError> {
        match self.concurrency {
            Some(0) => Err(ApspError::Config(
                ErrorInfo::new("zero-concurrency", "concurrency must be at least one")
                    .with_hint("omit the field to use available parallelism"),
            )),
            Some(workers) => Ok(workers),
            None => Ok(thread::available_parallelism().map_or(1, NonZeroUsize::get)),
        }
    }

    /// Returns the options forwarded to the relaxation phase.
    pub fn bellman_ford(&self) -> BellmanFordOpts {
        BellmanFordOpts {
            early_exit: self.early_exit,
        }
    }
}

//! Pipeline configuration
//!
//! The worker count is the only tunable the core needs. It is validated once,
//! at construction, so the partitioner and reducer can rely on
//! `MIN_WORKERS <= workers <= MAX_WORKERS` without re-checking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::constants::{DEFAULT_THREAD_NAME_PREFIX, MAX_WORKERS, MIN_WORKERS};
use crate::{Error, Result};

/// Number of workers requested for a run, always within `1..=MAX_WORKERS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct WorkerCount(usize);

impl WorkerCount {
    /// Validate a worker count
    pub fn new(workers: usize) -> Result<Self> {
        if workers < MIN_WORKERS {
            return Err(Error::WorkerCountZero);
        }
        if workers > MAX_WORKERS {
            return Err(Error::WorkerCountTooLarge(workers));
        }
        Ok(Self(workers))
    }

    /// One worker per available CPU, clamped to the accepted range
    pub fn available() -> Self {
        Self(num_cpus::get().clamp(MIN_WORKERS, MAX_WORKERS))
    }

    /// Get the raw count
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for WorkerCount {
    type Error = Error;

    fn try_from(workers: usize) -> Result<Self> {
        Self::new(workers)
    }
}

impl From<WorkerCount> for usize {
    fn from(workers: WorkerCount) -> Self {
        workers.0
    }
}

impl FromStr for WorkerCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .parse()
            .map_err(|_| Error::InvalidWorkerCount(s.to_string()))?;

        if value < MIN_WORKERS as i64 {
            return Err(Error::WorkerCountZero);
        }
        let workers = usize::try_from(value).map_err(|_| Error::InvalidWorkerCount(s.to_string()))?;
        Self::new(workers)
    }
}

impl fmt::Display for WorkerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for a summation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Requested number of concurrent workers
    pub workers: WorkerCount,

    /// Prefix for reducer thread names (`<prefix>-<index>`)
    pub thread_name_prefix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: WorkerCount::available(),
            thread_name_prefix: DEFAULT_THREAD_NAME_PREFIX.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a config with the given worker count and default naming
    pub fn new(workers: WorkerCount) -> Self {
        Self {
            workers,
            ..Default::default()
        }
    }

    /// Builder: set the worker count
    pub fn with_workers(mut self, workers: WorkerCount) -> Self {
        self.workers = workers;
        self
    }

    /// Builder: set the thread name prefix
    pub fn with_thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Load config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content =
            serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| Error::io(path, e))
    }
}

//! Partition → Reduce → Combine
//!
//! ```text
//! &[Record] ──► partition(len, workers) ──► ParallelReducer::reduce ──► combine ──► i64
//! ```
//!
//! A run holds no state beyond its arguments, so repeating it with the same
//! input yields the same total.

use tracing::{debug, info};

use crate::combine::combine;
use crate::config::{PipelineConfig, WorkerCount};
use crate::partition::{partition, Chunk};
use crate::record::Record;
use crate::reduce::{chunk_sum, ParallelReducer, PartialSum};
use crate::{Error, Result};

/// Outcome of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumReport {
    /// Σ (a + b) over every record
    pub total: i64,

    /// Chunks the input was split into
    pub chunks: Vec<Chunk>,

    /// One partial sum per chunk, in completion order
    pub partials: Vec<PartialSum>,
}

impl SumReport {
    /// Number of workers that actually ran
    pub fn workers_used(&self) -> usize {
        self.chunks.len()
    }
}

/// Sum `records` using the workers and thread naming in `config`
pub fn run(records: &[Record], config: &PipelineConfig) -> Result<SumReport> {
    if records.is_empty() {
        return Err(Error::NoData);
    }

    let requested = config.workers.get();
    let chunks = partition(records.len(), requested);
    if chunks.len() < requested {
        info!(
            "Requested {} workers but {} records only fill {} chunks",
            requested,
            records.len(),
            chunks.len()
        );
    }

    let partials = ParallelReducer::new(config).reduce(records, &chunks)?;
    let total = combine(&partials);
    debug!("Combined {} partial sums into {}", partials.len(), total);

    Ok(SumReport {
        total,
        chunks,
        partials,
    })
}

/// Sum `records` with `workers` concurrent workers
pub fn parallel_sum(records: &[Record], workers: WorkerCount) -> Result<i64> {
    run(records, &PipelineConfig::new(workers)).map(|report| report.total)
}

/// Single-threaded reference sum
pub fn sequential_sum(records: &[Record]) -> i64 {
    chunk_sum(records)
}

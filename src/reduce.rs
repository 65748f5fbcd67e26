//! Parallel Reducer
//!
//! Fans one task out per chunk and fans the partial sums back in.
//!
//! ```text
//!              ┌─ worker 0: Σ records[c0] ─┐
//! chunks ──────┼─ worker 1: Σ records[c1] ─┼──► sync_channel(n) ──► Vec<PartialSum>
//!              └─ worker n: Σ records[cn] ─┘
//!                      (rayon scope = join barrier)
//! ```
//!
//! Every chunk becomes its own rayon task, but tasks are not tied to OS
//! threads: each run builds a pool of at most one thread per CPU and the
//! tasks are scheduled onto it. Workers only read their own slice of the
//! input. The result channel is sized to the chunk count so no worker ever
//! blocks while delivering its result.

use std::sync::mpsc;
use tracing::{debug, trace};

use crate::config::PipelineConfig;
use crate::partition::Chunk;
use crate::record::Record;
use crate::{Error, Result};

/// Sum contributed by one chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartialSum {
    /// Index of the chunk that produced this sum
    pub chunk: usize,

    /// Σ (a + b) over the chunk's records
    pub sum: i64,
}

/// Σ (a + b) over `records`, in order
pub fn chunk_sum(records: &[Record]) -> i64 {
    records.iter().map(Record::value).sum()
}

/// Threads backing `chunks` tasks: one per chunk, capped at the CPU count
pub fn pool_threads(chunks: usize) -> usize {
    chunks.min(num_cpus::get()).max(1)
}

/// Runs one summation task per chunk on a dedicated thread pool
#[derive(Debug, Clone)]
pub struct ParallelReducer {
    thread_name_prefix: String,
}

impl ParallelReducer {
    /// Create a reducer using the thread naming from `config`
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            thread_name_prefix: config.thread_name_prefix.clone(),
        }
    }

    /// Sum every chunk concurrently
    ///
    /// Blocks until every dispatched task has reported. The returned partial
    /// sums are in completion order, one per chunk.
    pub fn reduce(&self, records: &[Record], chunks: &[Chunk]) -> Result<Vec<PartialSum>> {
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        let slices = chunks
            .iter()
            .map(|chunk| {
                records
                    .get(chunk.range())
                    .map(|slice| (chunk.index, slice))
                    .ok_or(Error::ChunkOutOfBounds {
                        index: chunk.index,
                        end: chunk.end,
                        len: records.len(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let prefix = self.thread_name_prefix.clone();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(pool_threads(slices.len()))
            .thread_name(move |i| format!("{}-{}", prefix, i))
            .build()?;

        debug!(
            "Dispatching {} chunks over {} records on {} threads",
            slices.len(),
            records.len(),
            pool.current_num_threads()
        );

        let (tx, rx) = mpsc::sync_channel(slices.len());
        pool.scope(move |scope| {
            for (index, slice) in slices {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    let sum = chunk_sum(slice);
                    trace!("Chunk {} summed {} records to {}", index, slice.len(), sum);
                    // Receiver outlives the scope; a failed send shows up as a missing partial
                    let _ = tx.send(PartialSum { chunk: index, sum });
                });
            }
        });

        // Every sender has been dropped once the scope returns
        let partials: Vec<PartialSum> = rx.into_iter().collect();
        if partials.len() != chunks.len() {
            return Err(Error::MissingPartial {
                expected: chunks.len(),
                received: partials.len(),
            });
        }

        debug!("Collected {} partial sums", partials.len());
        Ok(partials)
    }
}

impl Default for ParallelReducer {
    fn default() -> Self {
        Self::new(&PipelineConfig::default())
    }
}

//! # pairsum - Parallel Summation of Integer Pairs
//!
//! Finds a JSON file of `{"a": .., "b": ..}` records under a directory and
//! computes `Σ (a + b)` with a fixed number of concurrent workers, each owning
//! one contiguous slice of the input.
//!
//! ## Pipeline
//!
//! ```text
//! source::load_records ──► partition ──► ParallelReducer ──► combine ──► total
//!   (discover + decode)     (≤ N chunks)   (N threads)       (Σ partials)
//! ```
//!
//! The total is independent of the worker count: every valid partition gives
//! the same answer as [`sequential_sum`].
//!
//! ## Quick Start
//!
//! ```
//! use pairsum::{parallel_sum, Record, WorkerCount};
//!
//! let records = vec![Record::new(1, 2), Record::new(3, 4)];
//! let workers = WorkerCount::new(2)?;
//!
//! assert_eq!(parallel_sum(&records, workers)?, 10);
//! # Ok::<(), pairsum::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - **record** - The `(a, b)` input pair and its JSON shape
//! - **config** - Validated worker count and run configuration
//! - **partition** - Balanced contiguous chunking
//! - **reduce** - One task per chunk on a dedicated thread pool
//! - **combine** - Folding partial sums into the total
//! - **pipeline** - The three stages wired together
//! - **source** - Input file discovery and decoding

#![warn(missing_docs)]

// Error handling
mod error;
pub use error::{Error, Result};

// Constants and defaults
pub mod constants;
pub use constants::{MAX_WORKERS, MIN_WORKERS};

// Core modules
pub mod combine;
pub mod config;
pub mod partition;
pub mod pipeline;
pub mod record;
pub mod reduce;
pub mod source;

// Re-exports for convenience
pub use combine::combine;
pub use config::{PipelineConfig, WorkerCount};
pub use partition::{chunk_size, partition, Chunk};
pub use pipeline::{parallel_sum, run, sequential_sum, SumReport};
pub use record::Record;
pub use reduce::{chunk_sum, ParallelReducer, PartialSum};
pub use source::{find_json_file, load_records, read_records, LoadedRecords};

/// Version of the pairsum crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

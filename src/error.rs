//! Error types for the pairsum crate

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::MAX_WORKERS;

/// Result type for pairsum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading records or summing them
#[derive(Debug, Error)]
pub enum Error {
    /// Worker count text is not a number
    #[error("invalid worker count '{0}': expected a positive integer")]
    InvalidWorkerCount(String),

    /// Worker count is zero or negative
    #[error("worker count must be greater than 0")]
    WorkerCountZero,

    /// Worker count is above [`MAX_WORKERS`]
    #[error("worker count {0} exceeds the maximum of {max}", max = MAX_WORKERS)]
    WorkerCountTooLarge(usize),

    /// Directory walk finished without a match
    #[error("no JSON file found under {}", .0.display())]
    NoJsonFile(PathBuf),

    /// File is not an array of record objects
    #[error("invalid JSON file {}: {reason}", .path.display())]
    InvalidJson {
        /// File being decoded
        path: PathBuf,
        /// Decoder message
        reason: String,
    },

    /// Record array is empty
    #[error("no data found in JSON file")]
    NoData,

    /// Filesystem access failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Configuration file could not be used
    #[error("configuration error: {0}")]
    Config(String),

    /// Reducer thread pool could not be started
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),

    /// A chunk reaches past the end of the record sequence
    #[error("chunk {index} ends at {end} but only {len} records are available")]
    ChunkOutOfBounds {
        /// Offending chunk
        index: usize,
        /// Its exclusive end index
        end: usize,
        /// Number of records
        len: usize,
    },

    /// A worker finished without reporting its partial sum
    #[error("expected {expected} partial sums, received {received}")]
    MissingPartial {
        /// Chunks dispatched
        expected: usize,
        /// Partial sums collected
        received: usize,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(err.to_string())
    }
}

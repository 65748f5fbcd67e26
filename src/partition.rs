//! Chunk Partitioner
//!
//! Splits `len` records into at most `workers` contiguous, non-empty chunks.
//!
//! ```text
//! len = 7, workers = 3  →  chunk_size = ceil(7 / 3) = 3
//!
//! index:  0 1 2 | 3 4 5 | 6
//! chunk:    0   |   1   | 2
//! ```
//!
//! When `workers > len` the trailing chunks would start at or past `len`; they
//! are dropped, so the number of chunks is `min(workers, len)`.

use std::ops::Range;

/// Contiguous index range `[start, end)` handled by one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// Position of this chunk in partition order
    pub index: usize,

    /// First record index (inclusive)
    pub start: usize,

    /// Last record index (exclusive)
    pub end: usize,
}

impl Chunk {
    /// Number of records covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the chunk covers no records; always `false` for partition output
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Index range suitable for slicing the record sequence
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// `ceil(len / workers)`
///
/// `workers` must be non-zero.
pub fn chunk_size(len: usize, workers: usize) -> usize {
    debug_assert!(workers > 0, "worker count must be non-zero");
    len.div_ceil(workers)
}

/// Partition `len` records across `workers` workers
///
/// Returns chunks ordered by start index that are pairwise disjoint, non-empty
/// and together cover `0..len`. Returns an empty vector when `len == 0`.
pub fn partition(len: usize, workers: usize) -> Vec<Chunk> {
    if len == 0 || workers == 0 {
        return Vec::new();
    }

    let size = chunk_size(len, workers);
    (0..workers)
        .map(|i| i * size)
        .take_while(|&start| start < len)
        .enumerate()
        .map(|(index, start)| Chunk {
            index,
            start,
            end: (start + size).min(len),
        })
        .collect()
}

//! Constants and Default Values
//!
//! Limits shared by the configuration layer, the CLI and the record source.

/// Smallest accepted worker count.
pub const MIN_WORKERS: usize = 1;

/// Largest accepted worker count.
///
/// Each worker is a pool thread, so this bounds the number of OS threads a
/// single run may create. Requests above it are rejected before any work is
/// partitioned.
pub const MAX_WORKERS: usize = 10_000;

/// File extension (without the dot) the record source looks for.
pub const JSON_EXTENSION: &str = "json";

/// Prefix for the names of reducer threads.
pub const DEFAULT_THREAD_NAME_PREFIX: &str = "pairsum-worker";

//! Error types for the dispatch engine

use thiserror::Error;

/// Errors that cross the engine boundary
///
/// Transient provider failures never appear here; they are absorbed by
/// retry, backoff and requeue inside the dispatch loop. The caller gets
/// one of these, presents a single failure message, and retries the whole
/// operation from scratch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No usable credential survived pool filtering
    #[error("no usable API credentials configured")]
    NoCredentials,

    /// Every credential was exhausted or invalid before all chunks resolved
    #[error("processing incomplete: {missing} of {total} chunks unresolved")]
    Incomplete {
        /// Chunks without a recorded result
        missing: usize,
        /// Total chunks in the run
        total: usize,
    },

    /// Configuration rejected by validation
    #[error("configuration error: {0}")]
    Config(String),
}

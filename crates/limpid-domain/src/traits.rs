//! Trait definitions for external interactions
//!
//! These traits define the boundary between the dispatch engine and the
//! infrastructure that talks to a remote rewrite service. Implementations
//! live in other crates.

use crate::RewriteError;
use async_trait::async_trait;
use std::sync::Arc;

/// Rewrites one chunk of text using one credential
///
/// Implemented by the infrastructure layer (limpid-llm). Implementations
/// make exactly one outbound call per invocation and classify the outcome;
/// all retry policy lives in the dispatch engine.
#[async_trait]
pub trait ChunkRewriter: Send + Sync {
    /// Rewrite `text`, authenticating with `credential`
    async fn rewrite(&self, text: &str, credential: &str) -> Result<String, RewriteError>;
}

/// Progress callback invoked with `(completed, total)` after every
/// resolved chunk.
///
/// Workers invoke it concurrently; consumers must treat deliveries as
/// latest-known counts rather than a strictly ordered stream.
pub type ProgressFn = Arc<dyn Fn(usize, usize) + Send + Sync>;

//! High-level simplification pipeline
//!
//! Ties the chunker, dispatch engine and assembler together behind one
//! call: text in, simplified text out.

use crate::assemble::assemble;
use crate::chunker::SentenceChunker;
use crate::config::EngineConfig;
use crate::dispatch::DispatchEngine;
use crate::error::EngineError;
use crate::pool::CredentialPool;
use limpid_domain::{Chunk, ChunkRewriter, ProgressFn};
use tracing::info;

/// One source document's extracted text
///
/// Text extraction itself happens upstream; the pipeline only needs the
/// name for the per-document header in the combined body.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Display name, used as the section header
    pub name: String,
    /// Extracted plain text
    pub text: String,
}

impl SourceDocument {
    /// Create a source document
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// The full simplification pipeline: chunk, dispatch, assemble
///
/// # Examples
///
/// ```
/// use limpid_engine::{CredentialPool, EngineConfig, Simplifier};
/// use limpid_llm::MockRewriter;
///
/// # tokio_test::block_on(async {
/// let simplifier = Simplifier::new(MockRewriter::new(), EngineConfig::default()).unwrap();
/// let pool = CredentialPool::from_entries(vec!["key-1"]);
///
/// let output = simplifier
///     .simplify_text("Dense academic prose.", &pool, None)
///     .await
///     .unwrap();
/// assert_eq!(output, "simplified: Dense academic prose.");
/// # });
/// ```
pub struct Simplifier<R: ChunkRewriter> {
    chunker: SentenceChunker,
    engine: DispatchEngine<R>,
}

impl<R: ChunkRewriter + 'static> Simplifier<R> {
    /// Create a pipeline over the given rewriter
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the configuration fails
    /// validation.
    pub fn new(rewriter: R, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Config)?;

        Ok(Self {
            chunker: SentenceChunker::new(config.max_chunk_size),
            engine: DispatchEngine::new(rewriter, config),
        })
    }

    /// Simplify several documents as one combined body
    ///
    /// Documents are joined in order, each prefixed with a
    /// `=== name ===` header so document boundaries survive into the
    /// output.
    pub async fn simplify_documents(
        &self,
        documents: &[SourceDocument],
        pool: &CredentialPool,
        progress: Option<ProgressFn>,
    ) -> Result<String, EngineError> {
        let mut combined = String::new();
        for document in documents {
            combined.push_str(&format!("\n\n=== {} ===\n\n", document.name));
            combined.push_str(&document.text);
        }

        self.simplify_text(&combined, pool, progress).await
    }

    /// Simplify one text body
    ///
    /// Text that chunks to nothing (empty or whitespace-only) yields an
    /// empty output without touching the pool.
    pub async fn simplify_text(
        &self,
        text: &str,
        pool: &CredentialPool,
        progress: Option<ProgressFn>,
    ) -> Result<String, EngineError> {
        let pieces = self.chunker.chunk(text);
        if pieces.is_empty() {
            return Ok(String::new());
        }

        info!(chunks = pieces.len(), "text chunked for dispatch");

        let chunks: Vec<Chunk> = pieces
            .into_iter()
            .enumerate()
            .map(|(index, text)| Chunk::new(index, text))
            .collect();

        let table = self.engine.dispatch(chunks, pool, progress).await?;
        assemble(&table)
    }
}

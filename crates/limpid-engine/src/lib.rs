//! Limpid Engine
//!
//! The parallel chunk-dispatch core of the simplification pipeline.
//!
//! # Architecture
//!
//! ```text
//! Text → SentenceChunker → DispatchEngine → ResultTable → assemble → Text
//!                              │
//!                   one worker per CredentialPool entry
//! ```
//!
//! The dispatch engine owns a shared work queue of pending chunks and
//! runs one worker per credential. Each worker pulls a chunk, calls the
//! [`ChunkRewriter`](limpid_domain::ChunkRewriter) with its credential,
//! and applies retry/backoff policy: transient failures back off and
//! retry on the same credential, exhausted chunks bounce back to the
//! queue for another credential, and a rejected credential retires its
//! worker for the rest of the run. The run either resolves every chunk
//! or fails with [`EngineError::Incomplete`].
//!
//! # Example Usage
//!
//! ```
//! use limpid_engine::{CredentialPool, EngineConfig, Simplifier};
//! use limpid_llm::MockRewriter;
//!
//! # tokio_test::block_on(async {
//! let simplifier = Simplifier::new(MockRewriter::new(), EngineConfig::default()).unwrap();
//! let pool = CredentialPool::from_entries(vec!["key-1", "key-2"]);
//!
//! let output = simplifier
//!     .simplify_text("First sentence. Second sentence.", &pool, None)
//!     .await
//!     .unwrap();
//! assert!(output.starts_with("simplified:"));
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assemble;
pub mod chunker;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod pool;
pub mod simplifier;

mod state;

pub use assemble::{assemble, CHUNK_SEPARATOR};
pub use chunker::SentenceChunker;
pub use config::EngineConfig;
pub use dispatch::DispatchEngine;
pub use error::EngineError;
pub use pool::{CredentialPool, PLACEHOLDER_CREDENTIAL};
pub use simplifier::{Simplifier, SourceDocument};

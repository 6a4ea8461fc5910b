//! Limpid LLM Provider Layer
//!
//! [`ChunkRewriter`] implementations for the simplification pipeline.
//!
//! # Architecture
//!
//! This crate implements the `ChunkRewriter` trait from `limpid-domain`.
//! The dispatch engine is generic over that trait, so engines run
//! unchanged against either provider here.
//!
//! # Providers
//!
//! - [`MockRewriter`]: deterministic, scriptable rewriter for testing
//! - [`GroqProvider`]: Groq chat-completions API over HTTP
//!
//! # Examples
//!
//! ```
//! use limpid_llm::MockRewriter;
//! use limpid_domain::ChunkRewriter;
//!
//! # tokio_test::block_on(async {
//! let rewriter = MockRewriter::new();
//! let result = rewriter.rewrite("dense prose", "key-1").await.unwrap();
//! assert_eq!(result, "simplified: dense prose");
//! # });
//! ```

#![warn(missing_docs)]

pub mod groq;
pub mod prompt;

use async_trait::async_trait;
use limpid_domain::{ChunkRewriter, RewriteError};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

pub use groq::GroqProvider;

/// One scripted outcome for [`MockRewriter`]
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    /// Return `"simplified: {text}"`
    Success,
    /// Return the input text unchanged, the way the real provider degrades
    /// a response with no usable content
    Degraded,
    /// Fail with the given classified error
    Fail(RewriteError),
}

enum Script {
    Sequence(VecDeque<ScriptedOutcome>),
    Always(ScriptedOutcome),
}

/// Deterministic rewriter for tests
///
/// Outcomes can be scripted per credential: either a finite sequence
/// consumed one outcome per call (succeeding once exhausted), or a single
/// outcome repeated forever. Unscripted credentials always succeed. Every
/// call is recorded for later inspection.
///
/// # Examples
///
/// ```
/// use limpid_llm::{MockRewriter, ScriptedOutcome};
/// use limpid_domain::{ChunkRewriter, RewriteError};
///
/// # tokio_test::block_on(async {
/// let rewriter = MockRewriter::new();
/// rewriter.script("key-1", vec![ScriptedOutcome::Fail(RewriteError::RateLimited)]);
///
/// assert!(rewriter.rewrite("text", "key-1").await.is_err());
/// // Sequence exhausted, back to succeeding
/// assert!(rewriter.rewrite("text", "key-1").await.is_ok());
/// # });
/// ```
#[derive(Clone)]
pub struct MockRewriter {
    scripts: Arc<Mutex<HashMap<String, Script>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockRewriter {
    /// Create a rewriter that succeeds on every call
    pub fn new() -> Self {
        Self {
            scripts: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script a finite outcome sequence for a credential
    ///
    /// Calls beyond the end of the sequence succeed.
    pub fn script(&self, credential: impl Into<String>, outcomes: Vec<ScriptedOutcome>) {
        self.scripts
            .lock()
            .unwrap()
            .insert(credential.into(), Script::Sequence(outcomes.into()));
    }

    /// Script a single outcome repeated on every call for a credential
    pub fn always(&self, credential: impl Into<String>, outcome: ScriptedOutcome) {
        self.scripts
            .lock()
            .unwrap()
            .insert(credential.into(), Script::Always(outcome));
    }

    /// Total number of rewrite calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Number of rewrite calls made with the given credential
    pub fn calls_for(&self, credential: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(cred, _)| cred == credential)
            .count()
    }

    /// All recorded calls as `(credential, text)` pairs, in call order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockRewriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChunkRewriter for MockRewriter {
    async fn rewrite(&self, text: &str, credential: &str) -> Result<String, RewriteError> {
        self.calls
            .lock()
            .unwrap()
            .push((credential.to_string(), text.to_string()));

        let outcome = {
            let mut scripts = self.scripts.lock().unwrap();
            match scripts.get_mut(credential) {
                Some(Script::Sequence(queue)) => {
                    queue.pop_front().unwrap_or(ScriptedOutcome::Success)
                }
                Some(Script::Always(outcome)) => outcome.clone(),
                None => ScriptedOutcome::Success,
            }
        };

        match outcome {
            ScriptedOutcome::Success => Ok(format!("simplified: {}", text)),
            ScriptedOutcome::Degraded => Ok(text.to_string()),
            ScriptedOutcome::Fail(err) => Err(err),
        }
    }
}

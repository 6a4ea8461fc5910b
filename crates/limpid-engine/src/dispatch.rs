//! Parallel chunk dispatch across a credential pool
//!
//! One worker task per credential, all pulling from a shared work queue.
//! A worker claims a chunk, attempts it with its own credential, and on
//! transient failure backs off and retries up to a per-claim limit
//! before handing the chunk back for another credential. A rejected
//! credential retires its worker for the rest of the run; the chunk it
//! held goes back on the queue first, so no chunk is silently dropped.
//!
//! There is no fairness guarantee between workers. A fast credential
//! claims more chunks than a throttled one; that is the load-balancing
//! mechanism.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::pool::CredentialPool;
use crate::state::{Claimed, DispatchState, PendingChunk};
use limpid_domain::{Chunk, ChunkRewriter, ProgressFn, ResultTable, RewriteError};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// How long an idle worker waits before re-checking the queue while
/// other workers still hold chunks in flight.
const CLAIM_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Drives every chunk to completion across a pool of credentials
///
/// Generic over the [`ChunkRewriter`] so tests run the full dispatch
/// loop against a scripted rewriter instead of live HTTP.
pub struct DispatchEngine<R: ChunkRewriter> {
    rewriter: Arc<R>,
    config: EngineConfig,
}

impl<R: ChunkRewriter + 'static> DispatchEngine<R> {
    /// Create an engine over the given rewriter
    pub fn new(rewriter: R, config: EngineConfig) -> Self {
        Self {
            rewriter: Arc::new(rewriter),
            config,
        }
    }

    /// Process every chunk to completion or fail the whole run
    ///
    /// Spawns one worker per pool credential and waits for all of them
    /// to return. On success the table holds a result for every index.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoCredentials`] if the pool is empty
    /// - [`EngineError::Incomplete`] if every credential was exhausted
    ///   or invalid before all chunks resolved
    pub async fn dispatch(
        &self,
        chunks: Vec<Chunk>,
        pool: &CredentialPool,
        progress: Option<ProgressFn>,
    ) -> Result<ResultTable, EngineError> {
        if pool.is_empty() {
            return Err(EngineError::NoCredentials);
        }

        let total = chunks.len();
        if total == 0 {
            return Ok(ResultTable::new(0));
        }

        info!(
            chunks = total,
            credentials = pool.len(),
            "starting dispatch"
        );

        let state = Arc::new(DispatchState::new(chunks));
        let mut workers = JoinSet::new();

        for (worker, credential) in pool.iter().enumerate() {
            let credential = credential.to_string();
            let rewriter = Arc::clone(&self.rewriter);
            let state = Arc::clone(&state);
            let config = self.config.clone();
            let progress = progress.clone();

            workers.spawn(async move {
                run_worker(worker, credential, rewriter, state, config, progress).await;
            });
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                // A panicked worker leaves its chunk unresolved; the
                // completeness check below reports it.
                warn!("worker task failed: {}", e);
            }
        }

        let table = state.take_table();
        let missing = table.missing();
        if missing > 0 {
            warn!(missing, total, "dispatch ended with unresolved chunks");
            return Err(EngineError::Incomplete { missing, total });
        }

        info!(total, "dispatch complete");
        Ok(table)
    }
}

/// One worker's claim/attempt/resolve loop, bound to one credential.
async fn run_worker<R: ChunkRewriter>(
    worker: usize,
    credential: String,
    rewriter: Arc<R>,
    state: Arc<DispatchState>,
    config: EngineConfig,
    progress: Option<ProgressFn>,
) {
    loop {
        let pending = match state.claim() {
            Claimed::Work(pending) => pending,
            Claimed::Wait => {
                sleep(CLAIM_POLL_INTERVAL).await;
                continue;
            }
            Claimed::Drained => {
                debug!(worker, "queue drained, worker done");
                return;
            }
        };

        if !attempt_chunk(worker, &credential, &rewriter, &state, &config, &progress, pending).await
        {
            // Credential rejected; the in-flight chunk has already been
            // returned to the queue.
            return;
        }
    }
}

/// Drive one claimed chunk to a resolution or hand it back.
///
/// Returns `false` when the credential was rejected and the worker must
/// retire. Every exit path either resolves the chunk or requeues it.
async fn attempt_chunk<R: ChunkRewriter>(
    worker: usize,
    credential: &str,
    rewriter: &Arc<R>,
    state: &Arc<DispatchState>,
    config: &EngineConfig,
    progress: &Option<ProgressFn>,
    pending: PendingChunk,
) -> bool {
    let index = pending.chunk.index;
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        match rewriter.rewrite(&pending.chunk.text, credential).await {
            Ok(text) => {
                let (completed, total) = state.resolve(pending, text);
                debug!(worker, chunk = index, completed, total, "chunk resolved");
                if let Some(report) = progress {
                    report(completed, total);
                }
                return true;
            }
            Err(RewriteError::AuthInvalid) => {
                warn!(worker, "credential rejected, retiring worker");
                if !state.requeue(pending, config.max_requeues) {
                    warn!(chunk = index, "chunk abandoned after too many requeues");
                }
                return false;
            }
            Err(err) => {
                if attempts < config.max_attempts {
                    let step = match err {
                        RewriteError::RateLimited => config.rate_limit_backoff_ms,
                        _ => config.provider_backoff_ms,
                    };
                    let delay = Duration::from_millis(step * u64::from(attempts));
                    debug!(
                        worker,
                        chunk = index,
                        attempts,
                        error = %err,
                        delay_ms = delay.as_millis() as u64,
                        "attempt failed, backing off"
                    );
                    sleep(delay).await;
                } else {
                    debug!(
                        worker,
                        chunk = index,
                        attempts,
                        "attempts exhausted, requeueing for another credential"
                    );
                    if !state.requeue(pending, config.max_requeues) {
                        warn!(chunk = index, "chunk abandoned after too many requeues");
                    }
                    return true;
                }
            }
        }
    }
}

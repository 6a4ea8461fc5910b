//! Shared mutable state for one dispatch run
//!
//! The work queue, result table and run counters live behind a single
//! mutex. Critical sections cover only the pop/push/store/increment
//! steps; the lock is never held across a network call or a backoff
//! sleep.

use limpid_domain::{Chunk, ResultTable};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A chunk claimed from or waiting in the queue, together with the
/// number of times it has bounced back after a worker gave up on it.
#[derive(Debug)]
pub(crate) struct PendingChunk {
    pub chunk: Chunk,
    requeues: u32,
}

/// Outcome of one claim attempt.
pub(crate) enum Claimed {
    /// A chunk to work on; the caller must resolve or requeue it.
    Work(PendingChunk),
    /// Nothing queued, but another worker still holds a chunk that may
    /// come back. Poll again shortly.
    Wait,
    /// Nothing queued and nothing in flight. The worker can exit.
    Drained,
}

struct StateInner {
    queue: VecDeque<PendingChunk>,
    table: ResultTable,
    completed: usize,
    in_flight: usize,
    abandoned: usize,
}

/// The queue/table/counter bundle shared by all workers of one run.
///
/// Every chunk is either queued, held in flight by exactly one worker,
/// resolved into the table, or abandoned past the requeue cap. Claim
/// and requeue keep the counters consistent so [`claim`](Self::claim)
/// can tell "wait for a possible requeue" apart from "run over".
pub(crate) struct DispatchState {
    inner: Mutex<StateInner>,
}

impl DispatchState {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        let total = chunks.len();
        let queue = chunks
            .into_iter()
            .map(|chunk| PendingChunk { chunk, requeues: 0 })
            .collect();

        Self {
            inner: Mutex::new(StateInner {
                queue,
                table: ResultTable::new(total),
                completed: 0,
                in_flight: 0,
                abandoned: 0,
            }),
        }
    }

    /// Atomically pop the next pending chunk.
    pub fn claim(&self) -> Claimed {
        let mut inner = self.inner.lock().unwrap();
        match inner.queue.pop_front() {
            Some(pending) => {
                inner.in_flight += 1;
                Claimed::Work(pending)
            }
            None if inner.in_flight > 0 => Claimed::Wait,
            None => Claimed::Drained,
        }
    }

    /// Record a result for a claimed chunk.
    ///
    /// Returns the `(completed, total)` snapshot taken inside the
    /// critical section, for the caller to report after the lock is
    /// released.
    pub fn resolve(&self, pending: PendingChunk, text: String) -> (usize, usize) {
        let mut inner = self.inner.lock().unwrap();
        inner.table.store(pending.chunk.index, text);
        inner.completed += 1;
        inner.in_flight -= 1;
        (inner.completed, inner.table.len())
    }

    /// Return a claimed chunk to the queue for another worker.
    ///
    /// A chunk that has already bounced `max_requeues` times is dropped
    /// from the run instead; the post-condition check surfaces it as an
    /// incomplete result. Returns whether the chunk was requeued.
    pub fn requeue(&self, mut pending: PendingChunk, max_requeues: u32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight -= 1;
        if pending.requeues >= max_requeues {
            inner.abandoned += 1;
            return false;
        }
        pending.requeues += 1;
        inner.queue.push_back(pending);
        true
    }

    /// Take the result table once all workers have returned.
    pub fn take_table(&self) -> ResultTable {
        std::mem::take(&mut self.inner.lock().unwrap().table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(n: usize) -> Vec<Chunk> {
        (0..n).map(|i| Chunk::new(i, format!("chunk {}", i))).collect()
    }

    fn claim_work(state: &DispatchState) -> PendingChunk {
        match state.claim() {
            Claimed::Work(pending) => pending,
            _ => panic!("expected work"),
        }
    }

    #[test]
    fn test_claims_in_queue_order() {
        let state = DispatchState::new(chunks(3));
        assert_eq!(claim_work(&state).chunk.index, 0);
        assert_eq!(claim_work(&state).chunk.index, 1);
        assert_eq!(claim_work(&state).chunk.index, 2);
    }

    #[test]
    fn test_empty_queue_with_chunk_in_flight_waits() {
        let state = DispatchState::new(chunks(1));
        let pending = claim_work(&state);

        assert!(matches!(state.claim(), Claimed::Wait));

        state.resolve(pending, "done".to_string());
        assert!(matches!(state.claim(), Claimed::Drained));
    }

    #[test]
    fn test_resolve_stores_and_counts() {
        let state = DispatchState::new(chunks(2));
        let pending = claim_work(&state);

        let (completed, total) = state.resolve(pending, "done".to_string());
        assert_eq!((completed, total), (1, 2));

        let table = state.take_table();
        assert_eq!(table.get(0), Some("done"));
        assert_eq!(table.missing(), 1);
    }

    #[test]
    fn test_requeued_chunk_is_claimable_again() {
        let state = DispatchState::new(chunks(2));
        let first = claim_work(&state);
        let first_index = first.chunk.index;

        assert!(state.requeue(first, 8));

        // Requeue goes to the back of the queue.
        assert_eq!(claim_work(&state).chunk.index, 1);
        assert_eq!(claim_work(&state).chunk.index, first_index);
    }

    #[test]
    fn test_requeue_cap_abandons_chunk() {
        let state = DispatchState::new(chunks(1));

        let pending = claim_work(&state);
        assert!(state.requeue(pending, 1));

        let pending = claim_work(&state);
        assert!(!state.requeue(pending, 1));

        // The abandoned chunk no longer blocks termination.
        assert!(matches!(state.claim(), Claimed::Drained));
        assert_eq!(state.take_table().missing(), 1);
    }

    #[test]
    fn test_zero_chunks_drains_immediately() {
        let state = DispatchState::new(Vec::new());
        assert!(matches!(state.claim(), Claimed::Drained));
        assert!(state.take_table().is_complete());
    }
}

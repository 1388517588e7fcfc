//! Per-view generation tracking for cooperative cancellation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation counter owned by one consuming view.
///
/// Each `load` begins a new generation, superseding any in-flight load for
/// the same view. An asynchronous result is applied only while its snapshot
/// still matches the current generation; otherwise it is discarded without
/// touching shared state.
#[derive(Debug, Default)]
pub struct SyncSession {
    generation: AtomicU64,
}

impl SyncSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating all prior ones. Returns the
    /// snapshot the caller must re-check before applying results.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Invalidate every in-flight load (view disappeared).
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Whether a snapshot taken at `begin` is still the live generation.
    pub fn is_current(&self, snapshot: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == snapshot
    }
}

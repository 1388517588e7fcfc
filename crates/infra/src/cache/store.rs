//! In-memory window-keyed cache store.
//!
//! Entries are replaced whole per window key, last-write-wins. The only
//! coordination is the monotonic `fetched_at` guard: a refresh that would
//! regress the stored timestamp is rejected so a consumer never sees data
//! older than what it already displayed.

use std::collections::HashMap;

use evergreen_core::LocalCacheStore;
use evergreen_domain::{CacheEntry, DateWindow};
use parking_lot::RwLock;
use tracing::debug;

/// Window-keyed cache of synced calendar events.
#[derive(Default)]
pub struct InMemoryCacheStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached windows. Diagnostic only.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl LocalCacheStore for InMemoryCacheStore {
    fn get(&self, window: &DateWindow) -> Option<CacheEntry> {
        self.entries.read().get(&window.cache_key()).cloned()
    }

    fn put(&self, window: &DateWindow, entry: CacheEntry) -> bool {
        let key = window.cache_key();
        let mut entries = self.entries.write();

        if let Some(existing) = entries.get(&key) {
            if entry.fetched_at < existing.fetched_at {
                debug!(%key, "rejecting cache write with regressing fetch timestamp");
                return false;
            }
        }

        entries.insert(key, entry);
        true
    }
}

//! LRU + TTL response store.
//!
//! The store is the only shared mutable state in the process. The whole
//! read-check-write sequence runs under one [`parking_lot::Mutex`] so the LRU
//! bookkeeping stays consistent under concurrent handler invocations. There
//! is no request coalescing: two concurrent misses for the same key both go
//! upstream, and the later write wins.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;

use super::types::CacheEntry;

/// Bounded in-memory cache of completion responses.
///
/// Eviction is two-fold: inserting beyond the capacity bound evicts the
/// least-recently-used entry, and entries older than the TTL are treated as
/// misses when a lookup observes them (they are dropped at that point, never
/// swept by a background task). Reads refresh recency but not TTL.
///
/// Lookups and inserts take an explicit `now` in the `_at` variants so tests
/// can control the clock; production code uses the [`Instant::now`]
/// wrappers.
pub struct ResponseCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl ResponseCache {
    /// Creates a cache bounded to `capacity` entries with the given TTL.
    ///
    /// A zero capacity is clamped to one entry (config validation rejects
    /// zero before this is reached).
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Looks up a live entry, refreshing its recency.
    pub fn lookup(&self, key: &str) -> Option<CacheEntry> {
        self.lookup_at(key, Instant::now())
    }

    /// Looks up a live entry as of `now`.
    ///
    /// An expired entry is dropped and reported as a miss.
    pub fn lookup_at(&self, key: &str, now: Instant) -> Option<CacheEntry> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if !entry.is_expired(self.ttl, now) => Some(entry.clone()),
            Some(_) => {
                entries.pop(key);
                None
            }
            None => None,
        }
    }

    /// Inserts an entry, evicting the least-recently-used one if the cache
    /// is at capacity.
    pub fn insert(&self, key: String, response_text: String, audio_base64: Option<String>) {
        self.insert_at(key, response_text, audio_base64, Instant::now());
    }

    /// Inserts an entry stamped with `now`.
    pub fn insert_at(
        &self,
        key: String,
        response_text: String,
        audio_base64: Option<String>,
        now: Instant,
    ) {
        let entry = CacheEntry {
            response_text,
            audio_base64,
            created_at: now,
        };
        self.entries.lock().put(key, entry);
    }

    /// Returns the number of stored entries (live or expired-but-unobserved).
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

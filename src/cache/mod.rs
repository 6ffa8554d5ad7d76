//! Bounded in-memory response cache.
//!
//! Entries are keyed by normalized utterance + voice selector + model
//! selector ([`cache_key`]), bounded by both a maximum entry count (LRU
//! eviction) and a fixed time-to-live, and immutable once written.

pub mod key;
pub mod store;
pub mod types;

pub use key::{KEY_DELIMITER, cache_key};
pub use store::ResponseCache;
pub use types::{CACHE_STATUS_HEADER, CacheEntry, CacheStatus};

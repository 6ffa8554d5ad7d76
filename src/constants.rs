//! Cross-cutting, shared constants.
//!
//! Cache bounds and model identifiers live here so the handler, the config
//! defaults, and the tests agree on a single source of truth.

/// Maximum utterance length (in characters) sent upstream and used in cache
/// keys. Longer inputs are truncated, not rejected.
pub const MAX_UTTERANCE_CHARS: usize = 300;

/// Default maximum number of entries held by the response cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Default time-to-live for a cache entry, in seconds (1 hour).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Completion model used when the request does not name one.
pub const DEFAULT_MODEL: &str = "gemma2-9b-it";

/// Hardcoded fallback model, tried exactly once when the requested model
/// fails.
pub const FALLBACK_MODEL: &str = "llama-3.1-8b-instant";

use std::time::Instant;

/// Response header reporting whether the reply was served from cache.
pub const CACHE_STATUS_HEADER: &str = "X-Parley-Cache";

/// Outcome of a cache lookup, reported via [`CACHE_STATUS_HEADER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    #[inline]
    pub fn as_header_value(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
        }
    }

}

/// A cached completion result.
///
/// Written once on the first successful completion for a key and never
/// refreshed afterwards; text-only entries (from a synthesis failure) keep
/// serving audio-less responses until they expire.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Assistant reply text.
    pub response_text: String,

    /// Base64-encoded audio bytes, absent when synthesis failed.
    pub audio_base64: Option<String>,

    /// Insertion time, used for TTL expiry checks.
    pub created_at: Instant,
}

impl CacheEntry {
    /// Returns whether this entry has outlived the given TTL as of `now`.
    #[inline]
    pub fn is_expired(&self, ttl: std::time::Duration, now: Instant) -> bool {
        now.duration_since(self.created_at) >= ttl
    }
}

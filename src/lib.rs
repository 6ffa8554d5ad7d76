//! Parley library crate (used by the server binary and integration tests).
//!
//! Parley is a small HTTP gateway that turns a user utterance into an
//! assistant reply plus synthesized speech. It sits in front of two upstream
//! services (an LLM chat-completion API and a text-to-speech API) and adds
//! the two behaviors those services do not provide on their own:
//!
//! - **Bounded response caching** — a per-process LRU cache with a fixed
//!   time-to-live, so a repeated utterance never pays for a second round of
//!   upstream calls inside the TTL window ([`cache::ResponseCache`]).
//! - **Layered fallback** — the requested completion model is retried once
//!   against a hardcoded fallback model, and the primary voice is retried
//!   once against an alternate voice of the same gender, before the request
//!   degrades ([`completion::complete_with_fallback`],
//!   [`synthesis::synthesize_with_fallback`]).
//!
//! # Module map
//!
//! - [`config`] — environment-backed server configuration (`PARLEY_*`)
//! - [`cache`] — cache key derivation, entry types, and the LRU/TTL store
//! - [`completion`] — [`completion::CompletionBackend`] trait, Groq client,
//!   model fallback chain
//! - [`synthesis`] — [`synthesis::SynthesisBackend`] trait, ElevenLabs
//!   client, voice fallback chain
//! - [`gateway`] — the Axum router, handler state, and the request pipeline
//!
//! # Test/Mock Support
//!
//! Mock upstream backends are available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod cache;
pub mod completion;
pub mod config;
pub mod constants;
pub mod gateway;
pub mod synthesis;

pub use cache::{
    CACHE_STATUS_HEADER, CacheEntry, CacheStatus, KEY_DELIMITER, ResponseCache, cache_key,
};
#[cfg(any(test, feature = "mock"))]
pub use completion::MockCompletionBackend;
pub use completion::{CompletionBackend, CompletionError, GroqClient, complete_with_fallback};
pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS, DEFAULT_MODEL, FALLBACK_MODEL,
    MAX_UTTERANCE_CHARS,
};
pub use gateway::{HandlerState, create_router_with_state};
#[cfg(any(test, feature = "mock"))]
pub use synthesis::MockSynthesisBackend;
pub use synthesis::{
    ElevenLabsClient, SynthesisBackend, SynthesisError, VoiceGender, synthesize_with_fallback,
    voice_candidates,
};

//! Synthesis error types.

use thiserror::Error;

/// Errors from a single speech-synthesis attempt.
///
/// None of these are terminal for the request: the gateway degrades to a
/// text-only response when both voice attempts fail.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Network or protocol failure talking to the synthesis upstream.
    #[error("synthesis request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success HTTP status.
    #[error("synthesis upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Upstream answered 2xx but the audio body was empty. Treated as a
    /// failure so the alternate voice is still attempted.
    #[error("synthesis returned an empty audio body")]
    EmptyAudio,
}

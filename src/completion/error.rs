//! Completion error types.

use thiserror::Error;

/// Errors from a single completion attempt (or from the whole fallback
/// chain, which surfaces the last attempt's error).
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Network or protocol failure talking to the completion upstream.
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success HTTP status.
    #[error("completion upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Upstream answered 2xx but the response carried no assistant text.
    #[error("completion response contained no assistant message")]
    MissingContent,

    /// The candidate model list was empty.
    #[error("no completion model candidates configured")]
    NoCandidates,
}

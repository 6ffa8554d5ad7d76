//! Chat-completion upstream: backend trait, Groq client, model fallback.
//!
//! The fallback policy is an ordered candidate list tried in sequence:
//! attempt, classify, stop on the first success. With the usual two-element
//! list (requested model, hardcoded fallback) this yields exactly one retry
//! before the error is surfaced.

pub mod client;
pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use client::GroqClient;
pub use error::CompletionError;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockCompletionBackend;

use async_trait::async_trait;
use tracing::warn;

/// A chat-completion upstream.
///
/// Implementations produce the assistant reply text for one utterance
/// against one named model. The fallback chain lives outside the trait, in
/// [`complete_with_fallback`].
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Produces the assistant reply for `utterance` using `model`.
    async fn complete(&self, model: &str, utterance: &str) -> Result<String, CompletionError>;
}

/// Builds the ordered model candidate list for a request.
///
/// The requested model comes first, the hardcoded fallback second; when the
/// request already names the fallback there is only one candidate.
pub fn model_candidates<'a>(requested: &'a str, fallback: &'a str) -> Vec<&'a str> {
    if requested == fallback {
        vec![requested]
    } else {
        vec![requested, fallback]
    }
}

/// Tries each candidate model in order and returns the first successful
/// reply.
///
/// Failures short of the last candidate are logged and absorbed; the last
/// candidate's error is surfaced. The caller sees at most `candidates.len()`
/// upstream attempts.
pub async fn complete_with_fallback<C>(
    backend: &C,
    candidates: &[&str],
    utterance: &str,
) -> Result<String, CompletionError>
where
    C: CompletionBackend + ?Sized,
{
    let mut last_error = None;

    for model in candidates {
        match backend.complete(model, utterance).await {
            Ok(text) => return Ok(text),
            Err(e) => {
                warn!(model, error = %e, "completion attempt failed");
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or(CompletionError::NoCandidates))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_candidates_orders_requested_first() {
        let candidates = model_candidates("gemma2-9b-it", "llama-3.1-8b-instant");
        assert_eq!(candidates, vec!["gemma2-9b-it", "llama-3.1-8b-instant"]);
    }

    #[test]
    fn test_model_candidates_dedupes_fallback() {
        let candidates = model_candidates("llama-3.1-8b-instant", "llama-3.1-8b-instant");
        assert_eq!(candidates, vec!["llama-3.1-8b-instant"]);
    }

    #[tokio::test]
    async fn test_fallback_stops_on_first_success() {
        let backend = MockCompletionBackend::new();
        backend.succeed_with("a", "reply from a");
        backend.succeed_with("b", "reply from b");

        let text = complete_with_fallback(&backend, &["a", "b"], "hi")
            .await
            .expect("first candidate should win");

        assert_eq!(text, "reply from a");
        assert_eq!(backend.models_attempted(), vec!["a"]);
    }

    #[tokio::test]
    async fn test_fallback_retries_once_then_succeeds() {
        let backend = MockCompletionBackend::new();
        backend.fail("a");
        backend.succeed_with("b", "reply from b");

        let text = complete_with_fallback(&backend, &["a", "b"], "hi")
            .await
            .expect("fallback candidate should win");

        assert_eq!(text, "reply from b");
        assert_eq!(backend.models_attempted(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_fallback_surfaces_last_error() {
        let backend = MockCompletionBackend::new();
        backend.fail("a");
        backend.fail("b");

        let err = complete_with_fallback(&backend, &["a", "b"], "hi")
            .await
            .expect_err("both candidates failed");

        assert!(matches!(err, CompletionError::UpstreamStatus { .. }));
        assert_eq!(backend.models_attempted(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_empty_candidate_list() {
        let backend = MockCompletionBackend::new();

        let err = complete_with_fallback(&backend, &[], "hi")
            .await
            .expect_err("no candidates");

        assert!(matches!(err, CompletionError::NoCandidates));
        assert!(backend.models_attempted().is_empty());
    }
}

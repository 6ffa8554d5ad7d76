use std::sync::Arc;

use crate::cache::ResponseCache;
use crate::completion::CompletionBackend;
use crate::constants::{DEFAULT_MODEL, FALLBACK_MODEL};
use crate::synthesis::SynthesisBackend;

/// Shared handler state: the response cache plus the two upstream backends.
///
/// The cache is the only shared mutable piece; everything else is cloned
/// cheaply per request.
#[derive(Clone)]
pub struct HandlerState<
    C: CompletionBackend + Clone + Send + Sync + 'static,
    S: SynthesisBackend + Clone + Send + Sync + 'static,
> {
    pub cache: Arc<ResponseCache>,

    pub completion: C,

    pub synthesis: S,

    /// Model used when the request does not name one.
    pub default_model: String,

    /// Hardcoded fallback model, tried once after the requested model fails.
    pub fallback_model: String,
}

impl<C, S> HandlerState<C, S>
where
    C: CompletionBackend + Clone + Send + Sync + 'static,
    S: SynthesisBackend + Clone + Send + Sync + 'static,
{
    pub fn new(cache: Arc<ResponseCache>, completion: C, synthesis: S) -> Self {
        Self {
            cache,
            completion,
            synthesis,
            default_model: DEFAULT_MODEL.to_string(),
            fallback_model: FALLBACK_MODEL.to_string(),
        }
    }
}

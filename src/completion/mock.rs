//! Mock completion backend for tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::CompletionBackend;
use super::error::CompletionError;

#[derive(Clone)]
enum ScriptedOutcome {
    Succeed(String),
    Fail,
}

#[derive(Default)]
struct MockCompletionInner {
    outcomes: Mutex<HashMap<String, ScriptedOutcome>>,
    fallthrough: Mutex<Option<String>>,
    attempts: Mutex<Vec<(String, String)>>,
}

/// Scripted [`CompletionBackend`] recording every attempt.
///
/// Outcomes are scripted per model with [`succeed_with`](Self::succeed_with)
/// and [`fail`](Self::fail); unscripted models fail unless a catch-all reply
/// was set via [`succeed_all`](Self::succeed_all). The attempt log exposes
/// both the model and the exact utterance the handler sent upstream.
#[derive(Clone, Default)]
pub struct MockCompletionBackend {
    inner: Arc<MockCompletionInner>,
}

impl MockCompletionBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts `model` to succeed with `reply`.
    pub fn succeed_with(&self, model: &str, reply: &str) {
        self.inner
            .outcomes
            .lock()
            .insert(model.to_string(), ScriptedOutcome::Succeed(reply.to_string()));
    }

    /// Scripts `model` to fail with an upstream 500.
    pub fn fail(&self, model: &str) {
        self.inner
            .outcomes
            .lock()
            .insert(model.to_string(), ScriptedOutcome::Fail);
    }

    /// Makes every unscripted model succeed with `reply`.
    pub fn succeed_all(&self, reply: &str) {
        *self.inner.fallthrough.lock() = Some(reply.to_string());
    }

    /// Returns the models attempted so far, in order.
    pub fn models_attempted(&self) -> Vec<String> {
        self.inner
            .attempts
            .lock()
            .iter()
            .map(|(model, _)| model.clone())
            .collect()
    }

    /// Returns the utterances sent upstream so far, in order.
    pub fn utterances_sent(&self) -> Vec<String> {
        self.inner
            .attempts
            .lock()
            .iter()
            .map(|(_, utterance)| utterance.clone())
            .collect()
    }

    /// Returns the total number of upstream attempts.
    pub fn call_count(&self) -> usize {
        self.inner.attempts.lock().len()
    }
}

#[async_trait]
impl CompletionBackend for MockCompletionBackend {
    async fn complete(&self, model: &str, utterance: &str) -> Result<String, CompletionError> {
        self.inner
            .attempts
            .lock()
            .push((model.to_string(), utterance.to_string()));

        let scripted = self.inner.outcomes.lock().get(model).cloned();
        match scripted {
            Some(ScriptedOutcome::Succeed(reply)) => Ok(reply),
            Some(ScriptedOutcome::Fail) => Err(CompletionError::UpstreamStatus {
                status: 500,
                body: format!("scripted failure for model {model}"),
            }),
            None => match self.inner.fallthrough.lock().clone() {
                Some(reply) => Ok(reply),
                None => Err(CompletionError::UpstreamStatus {
                    status: 404,
                    body: format!("unscripted model {model}"),
                }),
            },
        }
    }
}

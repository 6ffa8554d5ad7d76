//! Mock synthesis backend for tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::SynthesisBackend;
use super::error::SynthesisError;

#[derive(Clone)]
enum ScriptedOutcome {
    Succeed(Vec<u8>),
    Fail,
}

#[derive(Default)]
struct MockSynthesisInner {
    outcomes: Mutex<HashMap<String, ScriptedOutcome>>,
    fallthrough: Mutex<Option<Vec<u8>>>,
    attempts: Mutex<Vec<String>>,
}

/// Scripted [`SynthesisBackend`] recording every attempt.
///
/// Scripting a zero-length success body reproduces an upstream that returns
/// 2xx with no audio; like the real client, the mock reports that as
/// [`SynthesisError::EmptyAudio`].
#[derive(Clone, Default)]
pub struct MockSynthesisBackend {
    inner: Arc<MockSynthesisInner>,
}

impl MockSynthesisBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts `voice_id` to succeed with the given audio bytes.
    pub fn succeed_with(&self, voice_id: &str, audio: Vec<u8>) {
        self.inner
            .outcomes
            .lock()
            .insert(voice_id.to_string(), ScriptedOutcome::Succeed(audio));
    }

    /// Scripts `voice_id` to fail with an upstream 500.
    pub fn fail(&self, voice_id: &str) {
        self.inner
            .outcomes
            .lock()
            .insert(voice_id.to_string(), ScriptedOutcome::Fail);
    }

    /// Makes every unscripted voice succeed with the given audio bytes.
    pub fn succeed_all(&self, audio: Vec<u8>) {
        *self.inner.fallthrough.lock() = Some(audio);
    }

    /// Returns the voice ids attempted so far, in order.
    pub fn voices_attempted(&self) -> Vec<String> {
        self.inner.attempts.lock().clone()
    }

    /// Returns the total number of synthesis attempts.
    pub fn call_count(&self) -> usize {
        self.inner.attempts.lock().len()
    }
}

#[async_trait]
impl SynthesisBackend for MockSynthesisBackend {
    async fn synthesize(&self, voice_id: &str, _text: &str) -> Result<Vec<u8>, SynthesisError> {
        self.inner.attempts.lock().push(voice_id.to_string());

        let scripted = self.inner.outcomes.lock().get(voice_id).cloned();
        let audio = match scripted {
            Some(ScriptedOutcome::Succeed(audio)) => audio,
            Some(ScriptedOutcome::Fail) => {
                return Err(SynthesisError::UpstreamStatus {
                    status: 500,
                    body: format!("scripted failure for voice {voice_id}"),
                });
            }
            None => match self.inner.fallthrough.lock().clone() {
                Some(audio) => audio,
                None => {
                    return Err(SynthesisError::UpstreamStatus {
                        status: 404,
                        body: format!("unscripted voice {voice_id}"),
                    });
                }
            },
        };

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }
        Ok(audio)
    }
}

//! ElevenLabs text-to-speech client.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::SynthesisBackend;
use super::error::SynthesisError;

/// Base URL for the ElevenLabs text-to-speech endpoint; the voice id is
/// appended as a path segment.
pub const ELEVENLABS_TTS_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

/// ElevenLabs model used for all synthesis calls.
const ELEVENLABS_MODEL_ID: &str = "eleven_turbo_v2";

/// Text-to-speech client for the ElevenLabs API.
#[derive(Clone)]
pub struct ElevenLabsClient {
    client: reqwest::Client,
    api_key: String,
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

impl ElevenLabsClient {
    /// Creates a client over a shared [`reqwest::Client`].
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl SynthesisBackend for ElevenLabsClient {
    async fn synthesize(&self, voice_id: &str, text: &str) -> Result<Vec<u8>, SynthesisError> {
        let url = format!("{ELEVENLABS_TTS_URL}/{voice_id}");

        let request = SynthesisRequest {
            text,
            model_id: ELEVENLABS_MODEL_ID,
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        debug!(voice_id, bytes = audio.len(), "synthesis received");
        Ok(audio.to_vec())
    }
}

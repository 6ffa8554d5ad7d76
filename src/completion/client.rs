//! Groq chat-completion client (OpenAI-compatible wire format).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CompletionBackend;
use super::error::CompletionError;

/// Groq's OpenAI-compatible chat completions endpoint.
pub const GROQ_CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Token ceiling for the reply; the persona already demands brevity, this
/// bounds the upstream cost when a model ignores it.
const MAX_COMPLETION_TOKENS: u32 = 160;

/// Chat-completion client for the Groq API.
#[derive(Clone)]
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    assistant_location: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl GroqClient {
    /// Creates a client over a shared [`reqwest::Client`].
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        assistant_location: Option<String>,
    ) -> Self {
        Self {
            client,
            api_key,
            assistant_location,
        }
    }

    /// Builds the fixed system instruction: persona, brevity constraint, and
    /// the optional location/time context lines.
    fn system_instruction(&self) -> String {
        let mut instruction = String::from(
            "You are a friendly voice assistant. Answer in one or two short \
             sentences; your reply is read aloud, so avoid lists, markdown, \
             and anything that does not speak well.",
        );

        if let Some(location) = &self.assistant_location {
            instruction.push_str(&format!(" The caller is located in {location}."));
        }

        let now = chrono::Local::now();
        instruction.push_str(&format!(
            " The current local time is {}.",
            now.format("%A %H:%M")
        ));

        instruction
    }
}

#[async_trait]
impl CompletionBackend for GroqClient {
    async fn complete(&self, model: &str, utterance: &str) -> Result<String, CompletionError> {
        let system = self.system_instruction();
        let request = ChatRequest {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: utterance,
                },
            ],
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        let response = self
            .client
            .post(GROQ_CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        debug!(model, choices = parsed.choices.len(), "completion received");

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(CompletionError::MissingContent)
    }
}

use serde::Serialize;

/// Body of a successful (200) or degraded (206) chat response.
///
/// Field names are camelCase on the wire for the browser UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Assistant reply text.
    pub response: String,

    /// Base64-encoded audio bytes; absent when synthesis failed or when a
    /// text-only cache entry was replayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_base64: Option<String>,

    /// Voice selector the request resolved to (`male` / `female`).
    pub voice_type: String,

    /// Voice id that produced the audio; absent when there is no audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,

    /// Model selector the request resolved to (the requested model, even
    /// when the fallback model produced the text).
    pub model_type: String,

    /// Whether this reply was served from the response cache.
    pub from_cache: bool,

    /// Wall-clock milliseconds from request entry to response construction.
    pub response_time: u64,

    /// Synthesis failure description on a degraded (206) response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

use std::time::Instant;

use axum::{
    Json,
    extract::{Multipart, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::{debug, info, instrument, warn};

use crate::cache::{CACHE_STATUS_HEADER, CacheStatus, cache_key};
use crate::completion::{CompletionBackend, complete_with_fallback, model_candidates};
use crate::constants::MAX_UTTERANCE_CHARS;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::ChatResponse;
use crate::gateway::state::HandlerState;
use crate::synthesis::{SynthesisBackend, VoiceGender, synthesize_with_fallback};

/// Raw form fields accepted by the chat endpoint.
#[derive(Debug, Default)]
struct ChatForm {
    input: Option<String>,
    voice_type: Option<String>,
    model_type: Option<String>,
}

/// Handles `POST /api/chat`.
///
/// Pipeline, in strict order: sanitize → cache lookup → (on miss)
/// completion with model fallback → (on completion success) synthesis with
/// voice fallback → cache write → respond. A completion failure is terminal
/// (500, nothing cached); a synthesis failure degrades the response to
/// text-only (206) and the text-only result is still cached.
#[instrument(skip(state, multipart), fields(model = tracing::field::Empty, voice = tracing::field::Empty))]
pub async fn chat_handler<C, S>(
    State(state): State<HandlerState<C, S>>,
    multipart: Multipart,
) -> Result<Response, GatewayError>
where
    C: CompletionBackend + Clone + Send + Sync + 'static,
    S: SynthesisBackend + Clone + Send + Sync + 'static,
{
    let started = Instant::now();

    let form = read_chat_form(multipart).await?;

    let raw_input = form
        .input
        .ok_or_else(|| GatewayError::InvalidInput("missing `input` field".to_string()))?;
    let utterance = sanitize_utterance(&raw_input)?;

    let voice: VoiceGender = match form.voice_type.filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.parse().map_err(GatewayError::InvalidInput)?,
        None => VoiceGender::default(),
    };
    let model = form
        .model_type
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| state.default_model.clone());

    tracing::Span::current().record("model", tracing::field::display(&model));
    tracing::Span::current().record("voice", tracing::field::display(voice));

    let key = cache_key(&utterance, voice.as_str(), &model);

    if let Some(entry) = state.cache.lookup(&key) {
        info!("cache hit");
        let voice_id = entry
            .audio_base64
            .is_some()
            .then(|| voice.primary_voice_id().to_string());
        let body = ChatResponse {
            response: entry.response_text,
            audio_base64: entry.audio_base64,
            voice_type: voice.as_str().to_string(),
            voice_id,
            model_type: model,
            from_cache: true,
            response_time: started.elapsed().as_millis() as u64,
            error: None,
        };
        return Ok(make_response(StatusCode::OK, CacheStatus::Hit, body));
    }

    debug!("cache miss, calling completion upstream");

    let candidates = model_candidates(&model, &state.fallback_model);
    let text = complete_with_fallback(&state.completion, &candidates, &utterance).await?;

    let (voice_id, audio_base64, synthesis_error) =
        match synthesize_with_fallback(&state.synthesis, voice, &text).await {
            Ok((voice_id, audio)) => (
                Some(voice_id.to_string()),
                Some(BASE64.encode(&audio)),
                None,
            ),
            Err(e) => {
                warn!(error = %e, "both synthesis attempts failed, degrading to text-only");
                (None, None, Some(e.to_string()))
            }
        };

    // Text-only entries are cached too: the completion is valid and
    // reusable, so an identical request inside the TTL replays it without
    // audio even if the voice service has recovered.
    state
        .cache
        .insert(key, text.clone(), audio_base64.clone());

    let degraded = synthesis_error.is_some();
    let body = ChatResponse {
        response: text,
        audio_base64,
        voice_type: voice.as_str().to_string(),
        voice_id,
        model_type: model,
        from_cache: false,
        response_time: started.elapsed().as_millis() as u64,
        error: synthesis_error,
    };

    let status = if degraded {
        StatusCode::PARTIAL_CONTENT
    } else {
        StatusCode::OK
    };
    Ok(make_response(status, CacheStatus::Miss, body))
}

/// Drains the multipart form into the three known fields; unknown fields are
/// ignored.
async fn read_chat_form(mut multipart: Multipart) -> Result<ChatForm, GatewayError> {
    let mut form = ChatForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::BadRequest(format!("failed to read multipart field: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let value = field
            .text()
            .await
            .map_err(|e| GatewayError::BadRequest(format!("failed to read field `{name}`: {e}")))?;

        match name.as_str() {
            "input" => form.input = Some(value),
            "voiceType" => form.voice_type = Some(value),
            "modelType" => form.model_type = Some(value),
            _ => {}
        }
    }

    Ok(form)
}

/// Trims and truncates the utterance to [`MAX_UTTERANCE_CHARS`] characters.
///
/// Truncation happens before the cache key is derived and before anything is
/// sent upstream, so two inputs identical up to the boundary share a key.
/// An utterance that is empty after trimming is rejected.
pub(crate) fn sanitize_utterance(raw: &str) -> Result<String, GatewayError> {
    let sanitized: String = raw.trim().chars().take(MAX_UTTERANCE_CHARS).collect();
    if sanitized.is_empty() {
        return Err(GatewayError::InvalidInput(
            "utterance is empty after trimming".to_string(),
        ));
    }
    Ok(sanitized)
}

pub(crate) fn make_response(
    status: StatusCode,
    cache_status: CacheStatus,
    body: ChatResponse,
) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        CACHE_STATUS_HEADER,
        HeaderValue::from_static(cache_status.as_header_value()),
    );
    (status, headers, Json(body)).into_response()
}

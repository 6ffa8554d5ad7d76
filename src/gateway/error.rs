use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cache::CACHE_STATUS_HEADER;
use crate::completion::CompletionError;

/// Terminal request failures.
///
/// Synthesis degradation is deliberately not a variant: a failed voice
/// pipeline still returns the completion text, as a 206 built in the
/// handler.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Input rejected before any upstream call (empty utterance, unknown
    /// voice selector).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The request body could not be read as multipart form data.
    #[error("malformed request: {0}")]
    BadRequest(String),

    /// Both the requested and the fallback completion model failed. No cache
    /// entry is written and synthesis is never attempted.
    #[error("completion failed")]
    CompletionFailed(#[from] CompletionError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            GatewayError::InvalidInput(message) => (
                StatusCode::BAD_REQUEST,
                "invalid input".to_string(),
                Some(message.clone()),
            ),
            GatewayError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                "malformed request".to_string(),
                Some(message.clone()),
            ),
            GatewayError::CompletionFailed(source) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to generate a response".to_string(),
                Some(source.to_string()),
            ),
        };

        let mut headers = HeaderMap::new();
        headers.insert(CACHE_STATUS_HEADER, HeaderValue::from_static("ERROR"));

        (status, headers, Json(ErrorResponse { error, details })).into_response()
    }
}

//! HTTP gateway (Axum) for the voice-chat pipeline.
//!
//! One chat route plus a health probe. The chat handler owns the whole
//! cache-and-fallback orchestration; see [`handler::chat_handler`].

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handler::chat_handler;
pub use state::HandlerState;

use crate::completion::CompletionBackend;
use crate::synthesis::SynthesisBackend;

/// Builds the application router.
///
/// CORS is permissive: the caller is a browser UI served from a different
/// origin.
pub fn create_router_with_state<C, S>(state: HandlerState<C, S>) -> Router
where
    C: CompletionBackend + Clone + Send + Sync + 'static,
    S: SynthesisBackend + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}

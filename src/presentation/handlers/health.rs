use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: &'static str,
    pub transcript_length: usize,
}

pub async fn health_handler<L>(State(state): State<AppState<L>>) -> impl IntoResponse
where
    L: LlmClient + ?Sized + 'static,
{
    let provider = if state.settings.scaffold.enabled {
        "scaffold"
    } else {
        "gemini"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            provider,
            transcript_length: state.chat_service.transcript_length().await,
        }),
    )
}

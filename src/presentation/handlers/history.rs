use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::LlmClient;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state))]
pub async fn history_handler<L>(State(state): State<AppState<L>>) -> impl IntoResponse
where
    L: LlmClient + ?Sized + 'static,
{
    let messages = state.chat_service.history().await;
    tracing::debug!(count = messages.len(), "Serving transcript");
    (StatusCode::OK, Json(messages))
}

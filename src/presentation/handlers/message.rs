use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::application::services::ChatError;
use crate::presentation::state::AppState;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Deserialize)]
pub struct SubmitMessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn message_handler<L>(
    State(state): State<AppState<L>>,
    payload: Result<Json<SubmitMessageRequest>, JsonRejection>,
) -> impl IntoResponse
where
    L: LlmClient + ?Sized + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected message body");
            return (
                rejection.status(),
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    match state.chat_service.submit(&request.text).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(ChatError::Provider(message)) => {
            tracing::error!(error = %message, "Provider rejected the message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: message }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Server error while relaying message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}

use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::Settings;

use super::{GeminiClient, ScaffoldLlmClient};

/// Picks the provider adapter for the configured mode.
pub fn create_llm_client(settings: &Settings) -> Result<Arc<dyn LlmClient>, LlmClientError> {
    if settings.scaffold.enabled {
        tracing::warn!(
            delay_ms = settings.scaffold.mock_response_delay_ms,
            "Scaffold mode enabled, replies are echoed locally"
        );
        return Ok(Arc::new(ScaffoldLlmClient::new(
            settings.scaffold.mock_response_delay_ms,
        )));
    }

    if settings.llm.api_key.is_empty() {
        tracing::warn!("No provider API key configured, every submission will fail upstream");
    }

    tracing::info!(model = %settings.llm.model, "Using Gemini provider");
    Ok(Arc::new(GeminiClient::from_settings(&settings.llm)?))
}

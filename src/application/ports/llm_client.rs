use async_trait::async_trait;

/// Outbound call to the generative-language provider.
///
/// `Ok(Some(text))` carries the reply, `Ok(None)` means the provider answered
/// without a reply at the expected location.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, text: &str) -> Result<Option<String>, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("provider error: {0}")]
    Provider(String),
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

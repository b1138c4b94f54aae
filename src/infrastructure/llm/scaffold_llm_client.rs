use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};

/// Local stand-in for the provider: echoes the prompt back.
pub struct ScaffoldLlmClient {
    response_delay: Duration,
}

impl ScaffoldLlmClient {
    pub fn new(response_delay_ms: u64) -> Self {
        Self {
            response_delay: Duration::from_millis(response_delay_ms),
        }
    }
}

#[async_trait]
impl LlmClient for ScaffoldLlmClient {
    async fn generate(&self, text: &str) -> Result<Option<String>, LlmClientError> {
        if !self.response_delay.is_zero() {
            tokio::time::sleep(self.response_delay).await;
        }
        Ok(Some(format!("Echo: {}", text)))
    }
}

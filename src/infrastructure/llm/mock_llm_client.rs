use std::collections::VecDeque;
use std::sync::Mutex;

use crate::application::ports::{LlmClient, LlmClientError};

pub type MockOutcome = Result<Option<String>, LlmClientError>;

/// Scripted provider for tests. Queued outcomes are consumed first, then the
/// default reply is returned.
pub struct MockLlmClient {
    outcomes: Mutex<VecDeque<MockOutcome>>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_outcomes(outcomes: impl IntoIterator<Item = MockOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, text: &str) -> Result<Option<String>, LlmClientError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(text.to_string());
        }

        let queued = self
            .outcomes
            .lock()
            .ok()
            .and_then(|mut outcomes| outcomes.pop_front());

        queued.unwrap_or_else(|| Ok(Some("Mock answer".to_string())))
    }
}

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::TranscriptStore;
use crate::domain::Message;

/// Process-lifetime transcript. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryTranscriptStore {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryTranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TranscriptStore for InMemoryTranscriptStore {
    async fn append(&self, message: Message) {
        let mut messages = self.messages.write().await;
        tracing::debug!(
            message_id = %message.id,
            role = %message.role,
            position = messages.len(),
            "Appending message"
        );
        messages.push(message);
    }

    async fn snapshot(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    async fn len(&self) -> usize {
        self.messages.read().await.len()
    }
}

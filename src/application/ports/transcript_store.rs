use async_trait::async_trait;

use crate::domain::Message;

/// Ordered, append-only message log for the single conversation.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    async fn append(&self, message: Message);

    /// Owned copy of every message in append order.
    async fn snapshot(&self) -> Vec<Message>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

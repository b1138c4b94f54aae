use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::TranscriptStore;
use crate::domain::Message;

/// Test double that keeps every append in order and can be inspected
/// synchronously.
#[derive(Default)]
pub struct RecordingTranscriptStore {
    appended: Mutex<Vec<Message>>,
}

impl RecordingTranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appended(&self) -> Vec<Message> {
        self.appended
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TranscriptStore for RecordingTranscriptStore {
    async fn append(&self, message: Message) {
        if let Ok(mut messages) = self.appended.lock() {
            messages.push(message);
        }
    }

    async fn snapshot(&self) -> Vec<Message> {
        self.appended()
    }

    async fn len(&self) -> usize {
        self.appended.lock().map(|messages| messages.len()).unwrap_or(0)
    }
}

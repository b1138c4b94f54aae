use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError, TranscriptStore};
use crate::domain::{Message, TurnIdGenerator};
use crate::infrastructure::observability::sanitize_prompt;

pub const NO_RESPONSE_TEXT: &str = "No response";

pub struct ChatService<L>
where
    L: LlmClient + ?Sized,
{
    transcript: Arc<dyn TranscriptStore>,
    llm_client: Arc<L>,
    turn_ids: TurnIdGenerator,
}

impl<L> ChatService<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(transcript: Arc<dyn TranscriptStore>, llm_client: Arc<L>) -> Self {
        Self {
            transcript,
            llm_client,
            turn_ids: TurnIdGenerator::new(),
        }
    }

    pub async fn history(&self) -> Vec<Message> {
        self.transcript.snapshot().await
    }

    pub async fn transcript_length(&self) -> usize {
        self.transcript.len().await
    }

    /// Stores the user turn, asks the provider, stores and returns the reply.
    ///
    /// The user message is appended before the provider is called and stays
    /// in the transcript when the call fails.
    #[tracing::instrument(skip(self, text), fields(prompt = %sanitize_prompt(text)))]
    pub async fn submit(&self, text: &str) -> Result<Message, ChatError> {
        let turn = self.turn_ids.next();

        let user_message = Message::user(turn, text.to_string());
        self.transcript.append(user_message).await;

        let reply = match self.llm_client.generate(text).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(
                    turn = %turn,
                    error = %e,
                    "Provider call failed, turn left without reply"
                );
                return Err(e.into());
            }
        };

        let reply_text = reply.unwrap_or_else(|| {
            tracing::warn!(turn = %turn, "Provider response had no reply text");
            NO_RESPONSE_TEXT.to_string()
        });

        let assistant_message = Message::assistant(turn, reply_text);
        self.transcript.append(assistant_message.clone()).await;

        tracing::info!(turn = %turn, "Turn completed");
        Ok(assistant_message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("{0}")]
    Provider(String),
    #[error("provider unavailable: {0}")]
    Unavailable(LlmClientError),
}

impl From<LlmClientError> for ChatError {
    fn from(e: LlmClientError) -> Self {
        match e {
            LlmClientError::Provider(message) => ChatError::Provider(message),
            other => ChatError::Unavailable(other),
        }
    }
}

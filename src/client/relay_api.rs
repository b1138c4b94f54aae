use async_trait::async_trait;

use crate::domain::Message;

/// The two calls the chat view makes against the relay service.
#[async_trait]
pub trait RelayApi: Send + Sync {
    async fn fetch_history(&self) -> Result<Vec<Message>, RelayApiError>;

    async fn submit_message(&self, text: &str) -> Result<SubmitReply, RelayApiError>;
}

/// Reply to a submission that reached the relay.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitReply {
    Created(Message),
    Rejected { error: String },
}

#[derive(Debug, thiserror::Error)]
pub enum RelayApiError {
    #[error("relay unreachable: {0}")]
    Transport(String),
    #[error("unreadable relay response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RelayApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RelayApiError::Decode(e.to_string())
        } else {
            RelayApiError::Transport(e.to_string())
        }
    }
}

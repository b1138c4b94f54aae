mod llm_client;
mod transcript_store;

pub use llm_client::{LlmClient, LlmClientError};
pub use transcript_store::TranscriptStore;

//! Terminal counterpart of the browser chat window: loads the transcript,
//! submits drafts and always re-reads the relay's snapshot afterwards.

mod chat_view;
mod http_relay_client;
mod relay_api;
mod render;

pub use chat_view::{CONNECTION_ERROR_TEXT, ChatView};
pub use http_relay_client::{DEFAULT_BACKEND_URL, HttpRelayClient};
pub use relay_api::{RelayApi, RelayApiError, SubmitReply};
pub use render::{TranscriptRenderer, render_message};

use crate::domain::{Message, MessageId, MessageRole, TurnIdGenerator};

use super::{RelayApi, RelayApiError, SubmitReply};

pub const CONNECTION_ERROR_TEXT: &str = "Error contacting server";

/// Client-side state of the chat window.
///
/// The view never edits the relay's transcript; after each submission it
/// replaces its copy with a fresh snapshot. Only the connection error bubble
/// is created locally.
pub struct ChatView<A>
where
    A: RelayApi,
{
    api: A,
    messages: Vec<Message>,
    draft: String,
    sending: bool,
    scroll_pending: bool,
    local_ids: TurnIdGenerator,
}

impl<A> ChatView<A>
where
    A: RelayApi,
{
    pub fn new(api: A) -> Self {
        Self {
            api,
            messages: Vec::new(),
            draft: String::new(),
            sending: false,
            scroll_pending: false,
            local_ids: TurnIdGenerator::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Returns whether the transcript changed since the last call, clearing
    /// the flag. Renderers scroll to the newest message when it is set.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    /// Initial load. A failure is logged and leaves the transcript as is.
    pub async fn load(&mut self) {
        match self.api.fetch_history().await {
            Ok(messages) => self.replace_messages(messages),
            Err(e) => tracing::error!(error = %e, "Failed to load chat history"),
        }
    }

    /// Sends the current draft and settles it. Returns `false` when nothing
    /// was sent, see [`ChatView::begin_submit`].
    pub async fn submit(&mut self) -> bool {
        let Some(text) = self.begin_submit() else {
            return false;
        };
        let result = self.exchange(&text).await;
        self.finish_submit(result);
        true
    }

    /// Takes the trimmed draft and marks the view as sending.
    ///
    /// Returns `None` without touching the draft when it is blank or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.sending {
            return None;
        }

        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.sending = true;
        self.draft.clear();
        Some(text)
    }

    /// Posts `text`, then re-reads the relay's transcript whatever the
    /// reply said.
    pub async fn exchange(&self, text: &str) -> Result<Vec<Message>, RelayApiError> {
        match self.api.submit_message(text).await? {
            SubmitReply::Created(reply) => {
                tracing::debug!(message_id = %reply.id, "Relay accepted message");
            }
            SubmitReply::Rejected { error } => {
                tracing::warn!(error = %error, "Relay reported an error");
            }
        }

        self.api.fetch_history().await
    }

    /// Applies the outcome of [`ChatView::exchange`] and clears the sending
    /// flag.
    pub fn finish_submit(&mut self, result: Result<Vec<Message>, RelayApiError>) {
        match result {
            Ok(messages) => self.replace_messages(messages),
            Err(e) => {
                tracing::error!(error = %e, "Failed to contact relay");
                self.push_connection_error();
            }
        }
        self.sending = false;
    }

    fn replace_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.scroll_pending = true;
    }

    fn push_connection_error(&mut self) {
        let turn = self.local_ids.next();
        let mut message = Message::new(
            turn,
            MessageRole::Assistant,
            CONNECTION_ERROR_TEXT.to_string(),
        );
        message.id = MessageId::local_error(turn);
        self.messages.push(message);
        self.scroll_pending = true;
    }
}

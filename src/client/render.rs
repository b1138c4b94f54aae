use chrono::Local;

use crate::domain::{Message, MessageId, MessageRole};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One display line: local time, speaker and text.
pub fn render_message(message: &Message) -> String {
    let speaker = match message.role {
        MessageRole::User => "You",
        MessageRole::Assistant => "AI",
    };
    format!(
        "[{}] {}: {}",
        message.timestamp.with_timezone(&Local).format(TIMESTAMP_FORMAT),
        speaker,
        message.text
    )
}

/// Incremental terminal output that always ends on the newest message.
#[derive(Debug, Default)]
pub struct TranscriptRenderer {
    shown: Vec<MessageId>,
}

impl TranscriptRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines to print so the screen matches `messages`. Only the new tail is
    /// returned while what was shown is still a prefix of the transcript;
    /// otherwise the whole transcript is redrawn.
    pub fn render_updates(&mut self, messages: &[Message]) -> Vec<String> {
        let still_prefix = self.shown.len() <= messages.len()
            && self
                .shown
                .iter()
                .zip(messages)
                .all(|(shown, message)| *shown == message.id);

        let mut lines = Vec::new();
        let start = if still_prefix {
            self.shown.len()
        } else {
            lines.push("----".to_string());
            0
        };

        lines.extend(messages[start..].iter().map(render_message));
        self.shown = messages.iter().map(|m| m.id.clone()).collect();
        lines
    }
}

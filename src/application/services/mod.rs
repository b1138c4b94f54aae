mod chat_service;

pub use chat_service::{ChatError, ChatService, NO_RESPONSE_TEXT};

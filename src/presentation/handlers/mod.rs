mod health;
mod history;
mod message;

pub use health::health_handler;
pub use history::history_handler;
pub use message::{
    ErrorResponse, INTERNAL_SERVER_ERROR_MESSAGE, SubmitMessageRequest, message_handler,
};

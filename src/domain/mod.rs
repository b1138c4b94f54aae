mod message;
mod message_id;
mod message_role;
mod turn_id;

pub use message::Message;
pub use message_id::MessageId;
pub use message_role::MessageRole;
pub use turn_id::{TurnId, TurnIdGenerator};

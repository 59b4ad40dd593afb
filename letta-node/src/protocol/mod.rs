//! Protocol types and request building for the Letta messages API

mod message_types;
mod types;

pub use message_types::remote_message_type;
pub use types::{
    build_message_request, MessageRequest, MessageRole, OutgoingMessage, SendMessageOptions,
};

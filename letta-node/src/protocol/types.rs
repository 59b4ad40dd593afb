//! Wire types for the Letta send-message operation
//!
//! These are the structures serialized into the request body for
//! `POST /v1/agents/{agent_id}/messages`. The design keeps two properties
//! the host runtime depends on:
//! - Presence tracking: every optional field is `Option<T>` and is
//!   serialized iff the caller set it, so an explicit `false` or `0`
//!   survives while an unset field never appears in the body.
//! - Top-level merge: tuning flags sit beside `messages` in the body, not
//!   nested under an options object.
//!
//! Message content is a plain string; the content-block representation used
//! by some Letta SDKs is deliberately not supported here, the two shapes
//! must never be mixed in one request.

use crate::protocol::message_types::remote_message_type;
use serde::{Deserialize, Serialize};

/// Role of a message sent to an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User input message
    User,
    /// System instructions
    System,
    /// Message attributed to the assistant
    Assistant,
}

/// A single outgoing message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// Role of the message sender
    pub role: MessageRole,

    /// Plain-text message content
    pub content: String,
}

/// Optional tuning flags for a send, as read from the node's parameter
/// surface
///
/// `None` means "the caller did not set this" and the field stays out of
/// the request entirely. The platform enforces the 1..=100 range on
/// `max_steps`; the builder does not re-validate it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendMessageOptions {
    /// Maximum number of steps the agent may take for this message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<u32>,

    /// Whether the response should use an assistant message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_assistant_message: Option<bool>,

    /// Whether to surface the agent's thinking process
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_thinking: Option<bool>,

    /// UI-facing tags selecting which message types the response includes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_return_message_types: Option<Vec<String>>,
}

impl SendMessageOptions {
    /// Set the step bound
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Set the assistant-message flag
    pub fn with_use_assistant_message(mut self, enabled: bool) -> Self {
        self.use_assistant_message = Some(enabled);
        self
    }

    /// Set the thinking flag
    pub fn with_enable_thinking(mut self, enabled: bool) -> Self {
        self.enable_thinking = Some(enabled);
        self
    }

    /// Set the return-message-type tags (UI vocabulary)
    pub fn with_return_message_types(
        mut self,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.include_return_message_types =
            Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// Request body for `POST /v1/agents/{agent_id}/messages`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    /// Messages to deliver; always a single entry in this node
    pub messages: Vec<OutgoingMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_assistant_message: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_thinking: Option<bool>,

    /// Message-type filter, already translated to the remote vocabulary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_return_message_types: Option<Vec<String>>,
}

/// Build the request body for one message send
///
/// Pure: inputs are not mutated and every call returns a fresh value.
/// Options fields are copied into the body only when set. An empty tag list
/// counts as unset, matching the host UI where an empty multi-select means
/// "no filter". Tags are translated through
/// [`remote_message_type`](crate::protocol::remote_message_type).
pub fn build_message_request(
    role: MessageRole,
    message: impl Into<String>,
    options: &SendMessageOptions,
) -> MessageRequest {
    let include_return_message_types = options
        .include_return_message_types
        .as_deref()
        .filter(|tags| !tags.is_empty())
        .map(|tags| {
            tags.iter()
                .map(|tag| remote_message_type(tag).to_string())
                .collect()
        });

    MessageRequest {
        messages: vec![OutgoingMessage {
            role,
            content: message.into(),
        }],
        max_steps: options.max_steps,
        use_assistant_message: options.use_assistant_message,
        enable_thinking: options.enable_thinking,
        include_return_message_types,
    }
}

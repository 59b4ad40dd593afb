//! The workflow-node surface
//!
//! This module is the boundary the host runtime talks to: operation
//! selection, the per-item parameter shape, the item-indexed output record,
//! and [`execute`], which resolves credentials and runs the selected
//! action over the input items.

mod send_message;

pub use send_message::send_message;

use crate::config::{CredentialError, CredentialResolver};
use crate::http::{HttpError, MessageDispatcher};
use crate::protocol::{MessageRole, SendMessageOptions};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Credential profile name the node requests from the host's store
pub const CREDENTIAL_PROFILE: &str = "lettaApi";

/// Errors surfaced to the host runtime
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("unknown operation: {operation}")]
    UnknownOperation { operation: String },

    #[error("item {item_index} failed: {source}")]
    Operation {
        item_index: usize,
        #[source]
        source: HttpError,
    },

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

/// Operations this node exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Send a message to a Letta agent
    SendMessage,
}

impl Operation {
    /// Parse the host's operation string
    pub fn parse(name: &str) -> Result<Self, NodeError> {
        match name {
            "sendMessage" => Ok(Self::SendMessage),
            other => Err(NodeError::UnknownOperation {
                operation: other.to_string(),
            }),
        }
    }
}

/// Per-item parameters for the send-message operation
///
/// Field names follow the host's parameter surface (`agentId`,
/// `additionalOptions`). Required-field and enum-membership checks happen
/// there; by the time values reach this struct they are well-formed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SendMessageParams {
    /// Identifier of the agent to message
    #[serde(rename = "agentId")]
    pub agent_id: String,

    /// Role of the outgoing message
    pub role: MessageRole,

    /// Message text
    pub message: String,

    /// Optional tuning flags; absent fields stay out of the request
    #[serde(rename = "additionalOptions", default)]
    pub additional_options: SendMessageOptions,
}

/// Back-reference from an output record to the input item that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    pub item: usize,
}

/// One output record, in the host runtime's per-item format
///
/// Every input item yields exactly one record: the verbatim API response on
/// success, or an `{"error": ...}` payload when a failure was tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Decoded response body, or `{"error": <message>}`
    pub json: Value,

    /// Index of the originating input item
    #[serde(rename = "pairedItem")]
    pub paired_item: PairedItem,
}

impl ExecutionRecord {
    /// Record a successful response for an item
    pub fn success(item: usize, json: Value) -> Self {
        Self {
            json,
            paired_item: PairedItem { item },
        }
    }

    /// Record a tolerated failure for an item
    pub fn error(item: usize, message: impl Into<String>) -> Self {
        Self {
            json: json!({ "error": message.into() }),
            paired_item: PairedItem { item },
        }
    }

    /// Whether this record carries a tolerated failure
    pub fn is_error(&self) -> bool {
        self.json.get("error").is_some()
    }
}

/// Execute the node: resolve credentials, then run the selected operation
/// over the input items
pub async fn execute(
    dispatcher: &dyn MessageDispatcher,
    credentials: &dyn CredentialResolver,
    operation: &str,
    items: &[SendMessageParams],
    continue_on_fail: bool,
) -> Result<Vec<ExecutionRecord>, NodeError> {
    match Operation::parse(operation)? {
        Operation::SendMessage => {
            // Credentials cannot change mid-run; resolve once and share the
            // read-only pair across items.
            let creds = credentials.resolve(CREDENTIAL_PROFILE).await?;
            send_message(dispatcher, &creds, items, continue_on_fail).await
        }
    }
}

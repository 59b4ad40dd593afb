//! # letta-node
//!
//! Workflow-automation integration node for the [Letta](https://docs.letta.com)
//! AI-agent platform. The node exposes one operation: send a message to a
//! Letta agent and map the JSON response (or failure) into the host
//! runtime's per-item record format.
//!
//! ## How a run works
//!
//! For each input item, in input order:
//! 1. the host supplies typed parameters ([`SendMessageParams`]) and a
//!    resolved credential pair ([`LettaCredentials`]);
//! 2. [`build_message_request`] produces the request body;
//! 3. the dispatcher POSTs it to `{base_url}/v1/agents/{agent_id}/messages`
//!    with bearer auth;
//! 4. the outcome becomes one [`ExecutionRecord`] tagged with the item's
//!    index.
//!
//! Per-item failures either become inline `{"error": ...}` records
//! (continue-on-fail) or abort the whole run with the failing item's index.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use letta_node::{
//!     node, HttpClient, LettaCredentials, MessageRole, SendMessageParams,
//!     SendMessageOptions, StaticCredentials,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher = HttpClient::new()?;
//!     let credentials = StaticCredentials::new(
//!         node::CREDENTIAL_PROFILE,
//!         LettaCredentials::for_token("your-api-token"),
//!     );
//!
//!     let items = vec![SendMessageParams {
//!         agent_id: "agent_abc123".to_string(),
//!         role: MessageRole::User,
//!         message: "Hello!".to_string(),
//!         additional_options: SendMessageOptions::default(),
//!     }];
//!
//!     let records = node::execute(&dispatcher, &credentials, "sendMessage", &items, false).await?;
//!     println!("{}", serde_json::to_string_pretty(&records)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Module organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Credential pair, resolver seam, secret handling |
//! | [`protocol`] | Wire types, request building, tag vocabulary mapping |
//! | [`http`] | Pooled reqwest dispatcher and error mapping |
//! | [`node`] | Operation surface, per-item loop, output records |

pub mod config;
pub mod http;
pub mod node;
pub mod protocol;

// Re-export the types most callers need
pub use config::{
    CredentialError, CredentialResolver, LettaCredentials, SecretString, StaticCredentials,
    DEFAULT_BASE_URL,
};
pub use http::{HttpClient, HttpError, MessageDispatcher};
pub use node::{
    execute, send_message, ExecutionRecord, NodeError, Operation, PairedItem, SendMessageParams,
};
pub use protocol::{
    build_message_request, remote_message_type, MessageRequest, MessageRole, OutgoingMessage,
    SendMessageOptions,
};

/// Returns the version of the letta-node crate
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

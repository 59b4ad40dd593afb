//! HTTP layer for talking to a Letta deployment
//!
//! This module owns everything between a built request body and a decoded
//! JSON response:
//! - Connection pooling and client construction
//! - Bearer-token authentication from the resolved credential pair
//! - Request-id generation and correlation
//! - Error mapping from transport failures and non-success statuses
//!
//! Retries and backoff are deliberately absent; a failed dispatch is
//! reported once and the per-item loop decides what to do with it.

pub mod client;
pub mod error;

pub use client::HttpClient;
pub use error::HttpError;

use crate::config::LettaCredentials;
use crate::protocol::MessageRequest;
use async_trait::async_trait;
use serde_json::Value;

/// Transport seam the per-item loop depends on
///
/// One implementation exists in production ([`HttpClient`]); tests may
/// substitute their own to script per-item outcomes.
#[async_trait]
pub trait MessageDispatcher: Send + Sync {
    /// Deliver one request body to an agent and return the decoded response
    async fn send_message(
        &self,
        credentials: &LettaCredentials,
        agent_id: &str,
        body: &MessageRequest,
    ) -> Result<Value, HttpError>;
}

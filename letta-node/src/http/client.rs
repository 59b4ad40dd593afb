//! HTTP client implementation using reqwest

use crate::config::LettaCredentials;
use crate::http::error::{map_http_error, HttpError};
use crate::http::MessageDispatcher;
use crate::protocol::MessageRequest;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// User agent sent with every request
const USER_AGENT: &str = concat!("letta-node/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client with connection pooling
///
/// Timeouts live here, on the transport; the per-item loop never enforces
/// its own.
#[derive(Clone)]
pub struct HttpClient {
    client: Arc<Client>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, HttpError> {
        Self::with_config(Duration::from_secs(10), Duration::from_secs(60), 10)
    }

    /// Create a new HTTP client with custom timeouts and pool size
    pub fn with_config(
        connect_timeout: Duration,
        request_timeout: Duration,
        max_idle_per_host: usize,
    ) -> Result<Self, HttpError> {
        let client = ClientBuilder::new()
            .pool_max_idle_per_host(max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .map_err(|e| HttpError::ClientConstruction {
                message: e.to_string(),
            })?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    fn messages_url(credentials: &LettaCredentials, agent_id: &str) -> String {
        format!(
            "{}/v1/agents/{}/messages",
            credentials.endpoint_base(),
            agent_id
        )
    }

    /// Check the credential pair against the deployment
    ///
    /// Issues the same probe the host's credential test uses:
    /// `GET {base_url}/v1/agents`. Succeeds on any 2xx status.
    pub async fn verify_credentials(
        &self,
        credentials: &LettaCredentials,
    ) -> Result<(), HttpError> {
        let url = format!("{}/v1/agents", credentials.endpoint_base());
        debug!("Verifying credentials against {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(credentials.api_token.expose_secret())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(map_http_error(status, body.as_deref(), ""));
        }

        Ok(())
    }
}

#[async_trait]
impl MessageDispatcher for HttpClient {
    async fn send_message(
        &self,
        credentials: &LettaCredentials,
        agent_id: &str,
        body: &MessageRequest,
    ) -> Result<Value, HttpError> {
        let request_id = Uuid::new_v4();
        let url = Self::messages_url(credentials, agent_id);

        info!(
            "Sending message to agent {} [request_id: {}]",
            agent_id, request_id
        );
        debug!("Request URL: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(credentials.api_token.expose_secret())
            .header("X-Request-ID", request_id.to_string())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!(
                        "Request timeout for agent {} [request_id: {}]",
                        agent_id, request_id
                    );
                    HttpError::Timeout
                } else {
                    error!(
                        "Request error for agent {} [request_id: {}]: {}",
                        agent_id, request_id, e
                    );
                    HttpError::NetworkError {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        debug!("Response status: {} [request_id: {}]", status, request_id);

        if !status.is_success() {
            let body = response.text().await.ok();
            warn!(
                "Request failed with status {} for agent {} [request_id: {}]",
                status, agent_id, request_id
            );
            return Err(map_http_error(status, body.as_deref(), agent_id));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            error!(
                "Failed to decode response from agent {} [request_id: {}]: {}",
                agent_id, request_id, e
            );
            HttpError::InvalidResponse {
                message: e.to_string(),
            }
        })?;

        info!(
            "Message delivered to agent {} [request_id: {}]",
            agent_id, request_id
        );

        Ok(response_json)
    }
}

fn transport_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::NetworkError {
            message: e.to_string(),
        }
    }
}

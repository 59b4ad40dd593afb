//! HTTP error mapping utilities

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by the dispatcher
///
/// Transport failures and remote rejections both surface here; the per-item
/// loop treats them identically when deciding whether to tolerate or abort.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("failed to construct HTTP client: {message}")]
    ClientConstruction { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("agent '{agent_id}' not found")]
    AgentNotFound { agent_id: String },

    #[error("rate limit exceeded: {message}")]
    RateLimited { message: String },

    #[error("server error ({status_code}): {message}")]
    ServerError { status_code: u16, message: String },

    #[error("request timeout")]
    Timeout,

    #[error("network error: {message}")]
    NetworkError { message: String },

    #[error("invalid response body: {message}")]
    InvalidResponse { message: String },
}

/// Map a non-success HTTP status and response body to an [`HttpError`]
pub fn map_http_error(status: StatusCode, body: Option<&str>, agent_id: &str) -> HttpError {
    let message = body
        .and_then(extract_error_message)
        .or_else(|| body.map(str::to_string))
        .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()));

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => HttpError::AuthenticationFailed,

        StatusCode::NOT_FOUND => HttpError::AgentNotFound {
            agent_id: agent_id.to_string(),
        },

        StatusCode::TOO_MANY_REQUESTS => HttpError::RateLimited { message },

        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => HttpError::Timeout,

        status if status.is_server_error() => HttpError::ServerError {
            status_code: status.as_u16(),
            message,
        },

        _ => HttpError::InvalidRequest { message },
    }
}

/// Pull a human-readable message out of a JSON error body
///
/// Letta deployments answer with `{"detail": ...}`; other shapes seen in
/// the wild use `message` or a string-valued `error` key.
fn extract_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;

    if let Some(detail) = json.get("detail") {
        return Some(match detail {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
    }

    if let Some(message) = json.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }

    if let Some(error) = json.get("error").and_then(Value::as_str) {
        return Some(error.to_string());
    }

    None
}

//! Credential surface for the Letta API
//!
//! The host runtime owns credential storage; this module defines the shape
//! of a resolved credential pair and the seam through which the node asks
//! for it. Field names match the host-side credential schema (`baseUrl`,
//! `apiToken`).

use crate::config::secrets::SecretString;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Public Letta endpoint used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://api.letta.com";

/// Errors from credential resolution and validation
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("API token is empty")]
    MissingToken,

    #[error("no credentials registered for profile '{profile}'")]
    UnknownProfile { profile: String },
}

/// A resolved credential pair for the Letta API
#[derive(Debug, Clone, Deserialize)]
pub struct LettaCredentials {
    /// Base URL of the Letta deployment (public cloud or self-hosted)
    #[serde(rename = "baseUrl", default = "default_base_url")]
    pub base_url: String,

    /// Bearer token for the `Authorization` header
    #[serde(rename = "apiToken")]
    pub api_token: SecretString,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl LettaCredentials {
    /// Create credentials against an explicit base URL
    pub fn new(base_url: impl Into<String>, api_token: impl Into<SecretString>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
        }
    }

    /// Create credentials against the public Letta endpoint
    pub fn for_token(api_token: impl Into<SecretString>) -> Self {
        Self::new(DEFAULT_BASE_URL, api_token)
    }

    /// Base URL with any trailing slash removed, ready for path joining
    pub fn endpoint_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check that the base URL parses and a token is present
    pub fn validate(&self) -> Result<(), CredentialError> {
        Url::parse(&self.base_url).map_err(|e| CredentialError::InvalidBaseUrl {
            url: self.base_url.clone(),
            message: e.to_string(),
        })?;

        if self.api_token.is_empty() {
            return Err(CredentialError::MissingToken);
        }

        Ok(())
    }
}

/// Seam to the host runtime's credential store
///
/// The node never reads credentials from files or the environment; whatever
/// store the host uses sits behind this trait.
#[async_trait]
pub trait CredentialResolver: Send + Sync {
    /// Resolve the credential pair registered under a profile name
    async fn resolve(&self, profile: &str) -> Result<LettaCredentials, CredentialError>;
}

/// In-memory resolver holding a single named credential pair
///
/// Used by tests and demos; production hosts supply their own resolver.
pub struct StaticCredentials {
    profile: String,
    credentials: LettaCredentials,
}

impl StaticCredentials {
    pub fn new(profile: impl Into<String>, credentials: LettaCredentials) -> Self {
        Self {
            profile: profile.into(),
            credentials,
        }
    }
}

#[async_trait]
impl CredentialResolver for StaticCredentials {
    async fn resolve(&self, profile: &str) -> Result<LettaCredentials, CredentialError> {
        if profile != self.profile {
            return Err(CredentialError::UnknownProfile {
                profile: profile.to_string(),
            });
        }
        Ok(self.credentials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_applied() {
        let creds: LettaCredentials =
            serde_json::from_str(r#"{"apiToken": "tok-123"}"#).unwrap();
        assert_eq!(creds.base_url, DEFAULT_BASE_URL);
        assert_eq!(creds.api_token.expose_secret(), "tok-123");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let creds = LettaCredentials::new("https://letta.example.com/", "tok");
        assert_eq!(creds.endpoint_base(), "https://letta.example.com");
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let creds = LettaCredentials::new("not a url", "tok");
        assert!(matches!(
            creds.validate(),
            Err(CredentialError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        let creds = LettaCredentials::for_token("");
        assert!(matches!(creds.validate(), Err(CredentialError::MissingToken)));
    }

    #[tokio::test]
    async fn test_static_resolver() {
        let resolver =
            StaticCredentials::new("lettaApi", LettaCredentials::for_token("tok-abc"));

        let creds = resolver.resolve("lettaApi").await.unwrap();
        assert_eq!(creds.api_token.expose_secret(), "tok-abc");

        let err = resolver.resolve("other").await.unwrap_err();
        assert!(matches!(err, CredentialError::UnknownProfile { .. }));
    }
}

//! Configuration module for the Letta node
//!
//! This module covers the credential surface of the node: the resolved
//! credential pair, the resolver seam to the host's credential store, and
//! redaction-safe secret handling. The node deliberately has no file or
//! environment configuration; everything it needs arrives per invocation.

mod credentials;
mod secrets;

pub use credentials::{
    CredentialError, CredentialResolver, LettaCredentials, StaticCredentials, DEFAULT_BASE_URL,
};
pub use secrets::SecretString;

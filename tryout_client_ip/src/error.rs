//! Error types produced while configuring client address resolution.

use thiserror::Error;
use tryout::Fault;

/// Errors raised while loading or validating [`crate::ClientIpConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientIpError {
    /// Gathering or deserializing configuration layers failed.
    #[error("failed to load client IP configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The merged configuration violated a constraint.
    #[error("invalid client IP configuration: {0}")]
    Invalid(#[from] Fault),
}

impl From<figment::Error> for ClientIpError {
    fn from(e: figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}

/// Result alias for configuration loading.
pub type ClientIpResult<T> = Result<T, ClientIpError>;

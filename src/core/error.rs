//! Errors raised by exchange providers and the provider factory.

use crate::core::exchange::ProviderKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The provider key does not name a known provider.
    #[error("Invalid exchange provider: {0}")]
    InvalidProvider(String),

    #[error("Provider {0} requires a credential")]
    MissingCredential(ProviderKind),

    #[error("Invalid endpoint URL {0}")]
    InvalidEndpoint(String),

    /// Failure reported by the HTTP client, including non-success statuses.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ExchangeError {
    /// Configuration errors are never transient. Transport errors are when the
    /// remote side timed out, refused the connection or answered with a 5xx.
    pub fn is_transient(&self) -> bool {
        match self {
            ExchangeError::InvalidProvider(_)
            | ExchangeError::MissingCredential(_)
            | ExchangeError::InvalidEndpoint(_) => false,
            ExchangeError::Transport(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status().is_some_and(|s| s.is_server_error())
            }
        }
    }
}

//! Currency exchange abstractions and core types

use crate::core::error::ExchangeError;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenExchangeRate,
    F1ExchangeRate,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [
        ProviderKind::OpenExchangeRate,
        ProviderKind::F1ExchangeRate,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProviderKind::OpenExchangeRate => "open_exchange_rate",
            ProviderKind::F1ExchangeRate => "f1_exchange_rate",
        }
    }
}

impl Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProviderKind {
    type Err = ExchangeError;

    // Keys are matched exactly, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| ExchangeError::InvalidProvider(s.to_string()))
    }
}

/// Opaque bearer token. Never printed through `Debug`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Credential(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// A single conversion. Amount and currency codes are sent as given.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub credential: Option<Credential>,
    pub timeout: Option<Duration>,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            amount,
            from: from.into(),
            to: to.into(),
            credential: None,
            timeout: None,
        }
    }

    pub fn with_credential(mut self, credential: Option<Credential>) -> Self {
        self.credential = credential;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Amount as it goes on the wire: `100.0` renders as `100`.
    pub fn amount_param(&self) -> String {
        self.amount.to_string()
    }

    pub fn query(&self) -> [(&'static str, String); 3] {
        [
            ("from", self.from.clone()),
            ("to", self.to.clone()),
            ("amount", self.amount_param()),
        ]
    }
}

/// Response of the remote service, body kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub status: u16,
    pub data: serde_json::Value,
}

#[async_trait]
pub trait ExchangeProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    fn requires_credential(&self) -> bool {
        false
    }

    async fn exchange(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ExchangeError>;
}

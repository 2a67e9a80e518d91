pub mod f1_exchange_rate;
mod http;
pub mod open_exchange_rate;

use crate::core::config::ProvidersConfig;
use crate::core::{ExchangeError, ExchangeProvider, ProviderKind};
use tracing::debug;

pub use f1_exchange_rate::F1ExchangeRateProvider;
pub use open_exchange_rate::OpenExchangeRateProvider;

/// Builds providers against configured endpoints.
#[derive(Debug, Clone, Default)]
pub struct ProviderFactory {
    providers: ProvidersConfig,
}

impl ProviderFactory {
    pub fn new(providers: ProvidersConfig) -> Self {
        Self { providers }
    }

    /// Every call hands out a fresh instance.
    pub fn create(&self, kind: ProviderKind) -> Box<dyn ExchangeProvider> {
        let base_url = self.providers.base_url(kind);
        debug!(provider = %kind, base_url, "Creating exchange provider");
        match kind {
            ProviderKind::OpenExchangeRate => Box::new(OpenExchangeRateProvider::new(base_url)),
            ProviderKind::F1ExchangeRate => Box::new(F1ExchangeRateProvider::new(base_url)),
        }
    }

    pub fn create_from_key(&self, key: &str) -> Result<Box<dyn ExchangeProvider>, ExchangeError> {
        Ok(self.create(key.parse()?))
    }
}

/// Creates a provider for `key` using the public endpoints.
pub fn create(key: &str) -> Result<Box<dyn ExchangeProvider>, ExchangeError> {
    ProviderFactory::default().create_from_key(key)
}

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, instrument};

use super::http;
use crate::core::{
    ConversionRequest, ConversionResult, ExchangeError, ExchangeProvider, ProviderKind,
};

/// Aggregator service behind a bearer token.
pub struct F1ExchangeRateProvider {
    base_url: String,
}

impl F1ExchangeRateProvider {
    pub fn new(base_url: &str) -> Self {
        F1ExchangeRateProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ExchangeProvider for F1ExchangeRateProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::F1ExchangeRate
    }

    fn requires_credential(&self) -> bool {
        true
    }

    #[instrument(
        name = "F1ExchangeRateConvert",
        skip(self, request),
        fields(from = %request.from, to = %request.to, amount = request.amount)
    )]
    async fn exchange(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ExchangeError> {
        let credential = request
            .credential
            .as_ref()
            .ok_or(ExchangeError::MissingCredential(self.kind()))?;

        let url = http::endpoint(&self.base_url, "/v1/currency/Convert", request)?;
        debug!("Requesting conversion from {}", url);

        let client = http::client()?;
        let builder = client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", credential.expose()));

        http::send(builder, request.timeout).await
    }
}

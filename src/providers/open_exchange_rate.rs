use async_trait::async_trait;
use tracing::{debug, instrument};

use super::http;
use crate::core::{
    ConversionRequest, ConversionResult, ExchangeError, ExchangeProvider, ProviderKind,
};

/// Public exchange-rate service. No authentication, a credential is ignored.
pub struct OpenExchangeRateProvider {
    base_url: String,
}

impl OpenExchangeRateProvider {
    pub fn new(base_url: &str) -> Self {
        OpenExchangeRateProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ExchangeProvider for OpenExchangeRateProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenExchangeRate
    }

    #[instrument(
        name = "OpenExchangeRateConvert",
        skip(self, request),
        fields(from = %request.from, to = %request.to, amount = request.amount)
    )]
    async fn exchange(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ExchangeError> {
        let url = http::endpoint(&self.base_url, "/convert", request)?;
        debug!("Requesting conversion from {}", url);

        let client = http::client()?;
        http::send(client.get(url), request.timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Credential;
    use std::error::Error;
    use std::time::Duration;
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MOCK_RESPONSE: &str = r#"{
        "success": true,
        "query": {"from": "USD", "to": "JPY", "amount": 100},
        "info": {"rate": 149.52},
        "result": 14952.0
    }"#;

    async fn create_mock_server() -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/convert"))
            .and(query_param("from", "USD"))
            .and(query_param("to", "JPY"))
            .and(query_param("amount", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_string(MOCK_RESPONSE))
            .expect(1)
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_conversion() {
        let mock_server = create_mock_server().await;
        let provider = OpenExchangeRateProvider::new(&mock_server.uri());

        let result = provider
            .exchange(&ConversionRequest::new(100.0, "USD", "JPY"))
            .await
            .expect("Failed to convert");

        assert_eq!(result.status, 200);
        let expected: serde_json::Value = serde_json::from_str(MOCK_RESPONSE).unwrap();
        assert_eq!(result.data, expected);
    }

    #[tokio::test]
    async fn test_credential_is_not_sent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(401))
            .expect(0)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/convert"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = OpenExchangeRateProvider::new(&mock_server.uri());
        let request = ConversionRequest::new(100.0, "USD", "JPY")
            .with_credential(Some(Credential::new("unused")));

        assert!(!provider.requires_credential());
        let result = provider.exchange(&request).await.unwrap();
        assert_eq!(result.data, serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_non_json_body_is_kept_as_string() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/convert"))
            .respond_with(ResponseTemplate::new(200).set_body_string("14952.0 JPY"))
            .mount(&mock_server)
            .await;

        let provider = OpenExchangeRateProvider::new(&mock_server.uri());
        let result = provider
            .exchange(&ConversionRequest::new(100.0, "USD", "JPY"))
            .await
            .unwrap();
        assert_eq!(result.data, serde_json::Value::String("14952.0 JPY".into()));
    }

    #[tokio::test]
    async fn test_api_error_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/convert"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = OpenExchangeRateProvider::new(&mock_server.uri());
        let err = provider
            .exchange(&ConversionRequest::new(100.0, "USD", "JPY"))
            .await
            .unwrap_err();

        match &err {
            ExchangeError::Transport(e) => {
                assert_eq!(e.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
            }
            other => panic!("Expected transport error, got {other:?}"),
        }
        assert!(err.is_transient());
        assert!(err.source().is_some());
    }

    #[tokio::test]
    async fn test_network_failure_is_passed_through() {
        // Grab a free port, then release it so the connection is refused.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let provider = OpenExchangeRateProvider::new(&uri);
        let err = provider
            .exchange(&ConversionRequest::new(100.0, "USD", "JPY"))
            .await
            .unwrap_err();

        match &err {
            ExchangeError::Transport(e) => assert!(e.is_connect() || e.is_request()),
            other => panic!("Expected transport error, got {other:?}"),
        }
        let source = err.source().expect("transport error keeps its source");
        assert!(source.downcast_ref::<reqwest::Error>().is_some());
    }

    #[tokio::test]
    async fn test_timeout_is_applied_per_call() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/convert"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(MOCK_RESPONSE)
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let provider = OpenExchangeRateProvider::new(&mock_server.uri());
        let request = ConversionRequest::new(100.0, "USD", "JPY")
            .with_timeout(Some(Duration::from_millis(100)));
        let err = provider.exchange(&request).await.unwrap_err();

        assert!(matches!(&err, ExchangeError::Transport(e) if e.is_timeout()));
        assert!(err.is_transient());
    }
}

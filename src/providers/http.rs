use crate::core::{ConversionRequest, ConversionResult, ExchangeError};
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("fxswitch/", env!("CARGO_PKG_VERSION"));

pub(crate) fn client() -> Result<reqwest::Client, ExchangeError> {
    Ok(reqwest::Client::builder().user_agent(USER_AGENT).build()?)
}

/// `{base_url}{path}?from=..&to=..&amount=..`
pub(crate) fn endpoint(
    base_url: &str,
    path: &str,
    request: &ConversionRequest,
) -> Result<Url, ExchangeError> {
    let url = format!("{base_url}{path}");
    Url::parse_with_params(&url, request.query())
        .map_err(|e| ExchangeError::InvalidEndpoint(format!("{url}: {e}")))
}

/// Sends one request and hands back the body untouched.
///
/// Non-success statuses are reported as transport errors. A body that is not
/// JSON is kept as a JSON string.
pub(crate) async fn send(
    request: reqwest::RequestBuilder,
    timeout: Option<Duration>,
) -> Result<ConversionResult, ExchangeError> {
    let request = match timeout {
        Some(timeout) => request.timeout(timeout),
        None => request,
    };

    let response = request.send().await?.error_for_status()?;
    debug!(response = ?response, "Received exchange response");

    let status = response.status().as_u16();
    let body = response.text().await?;
    let data = serde_json::from_str(&body).unwrap_or_else(|_| serde_json::Value::String(body));

    Ok(ConversionResult { status, data })
}

pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{ConversionRequest, ConversionResult, Credential};
use crate::providers::ProviderFactory;
use anyhow::Result;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_PROVIDER: &str = "f1_exchange_rate";

/// Inputs of a single conversion. Unset fields fall back to the config file.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub provider: Option<String>,
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub credential: Option<Credential>,
    pub timeout: Option<Duration>,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            provider: None,
            amount: 100.0,
            from: "USD".to_string(),
            to: "JPY".to_string(),
            credential: None,
            timeout: None,
        }
    }
}

/// Performs one conversion end to end. Ctrl-C abandons the in-flight request.
pub async fn run(options: RunOptions, config_path: Option<&str>) -> Result<ConversionResult> {
    info!("fxswitch starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let timeout = options.timeout.or_else(|| config.timeout());
    let key = options
        .provider
        .or(config.default_provider)
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());
    let provider = ProviderFactory::new(config.providers).create_from_key(&key)?;

    let request = ConversionRequest::new(options.amount, options.from, options.to)
        .with_credential(options.credential.or(config.credential))
        .with_timeout(timeout);

    tokio::select! {
        result = provider.exchange(&request) => {
            let result = result?;
            info!(provider = %provider.kind(), status = result.status, "Conversion complete");
            Ok(result)
        }
        _ = tokio::signal::ctrl_c() => anyhow::bail!("Conversion cancelled"),
    }
}

use crate::core::exchange::{Credential, ProviderKind};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

pub const OPEN_EXCHANGE_RATE_URL: &str = "https://api.exchangerate.host";
pub const F1_EXCHANGE_RATE_URL: &str = "https://api.m3o.com";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EndpointConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProvidersConfig {
    pub open_exchange_rate: EndpointConfig,
    pub f1_exchange_rate: EndpointConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            open_exchange_rate: EndpointConfig {
                base_url: OPEN_EXCHANGE_RATE_URL.to_string(),
            },
            f1_exchange_rate: EndpointConfig {
                base_url: F1_EXCHANGE_RATE_URL.to_string(),
            },
        }
    }
}

impl ProvidersConfig {
    pub fn base_url(&self, kind: ProviderKind) -> &str {
        match kind {
            ProviderKind::OpenExchangeRate => &self.open_exchange_rate.base_url,
            ProviderKind::F1ExchangeRate => &self.f1_exchange_rate.base_url,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    pub default_provider: Option<String>,
    pub timeout_secs: Option<u64>,
    pub credential: Option<Credential>,
}

impl AppConfig {
    /// Loads the config at the default location, or defaults when there is none.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxswitch", "fxswitch")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub mod consts;

use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

use crate::types::Network;
use consts::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_MS,
    DEFAULT_TIMEOUT_SECS,
};

/// Settings consumed by [`crate::dispatch::HttpDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl TransportConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

/// Client configuration. Read-only once the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    /// Used whenever an operation does not name a network.
    pub network: Network,
    pub transport: TransportConfig,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, network: Network) -> Self {
        Self {
            api_key: api_key.into(),
            network,
            transport: TransportConfig::default(),
        }
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    /// Combine a key supplied by the caller with settings read from disk.
    pub fn from_file(api_key: impl Into<String>, file: FileConfig) -> Self {
        Self {
            api_key: api_key.into(),
            network: file.network,
            transport: file.transport,
        }
    }
}

/// On-disk settings. The API key is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub network: Network,
    #[serde(default)]
    pub transport: TransportConfig,
}

/// Load configuration from a TOML file.
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<FileConfig> {
    let s = fs::read_to_string(path)?;
    let cfg: FileConfig = toml::from_str(&s)?;
    Ok(cfg)
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new("key", Network::Mainnet);
        assert_eq!(config.api_key, "key");
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.transport.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.transport.max_attempts, 1);
        assert_eq!(config.transport.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let cfg: FileConfig = toml::from_str(
            r#"
            network = "mainnet-beta"

            [transport]
            timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(cfg.network, Network::Mainnet);
        assert_eq!(cfg.transport.timeout_secs, 5);
        assert_eq!(cfg.transport.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.transport.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_config_from_path() {
        let path = std::env::temp_dir().join(format!(
            "cnft_client_test_config_{}.toml",
            std::process::id()
        ));
        fs::write(&path, "network = \"testnet\"\n").unwrap();

        let loaded = load_config_from_path(&path);
        fs::remove_file(&path).unwrap();

        let file = loaded.unwrap();
        let config = ClientConfig::from_file("key", file);
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.transport, TransportConfig::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config_from_path("does-not-exist.toml").is_err());
    }
}

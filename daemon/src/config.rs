//! Daemon configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(String),
}

/// Configuration for the stakeview daemon.
///
/// Can be loaded from a TOML file via [`DashboardConfig::from_toml_file`]
/// or built programmatically (e.g. for tests). CLI flags and environment
/// variables override file values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the node gateway.
    #[serde(default = "default_node_url")]
    pub node_url: String,

    /// Account whose per-user stake the panel follows.
    #[serde(default = "default_account")]
    pub account: String,

    /// Port the dashboard HTTP server listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Poll interval for new blocks, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Block explorer base URL for transaction links.
    #[serde(default = "default_explorer_url")]
    pub explorer_url: Option<String>,

    /// Price endpoint returning `{"usd": <price>}`; unset disables the
    /// USD display.
    #[serde(default)]
    pub price_url: Option<String>,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_node_url() -> String {
    "http://127.0.0.1:8545".to_string()
}

fn default_account() -> String {
    format!("0x{}", "0".repeat(40))
}

fn default_listen_port() -> u16 {
    4943
}

fn default_poll_interval_ms() -> u64 {
    4000
}

fn default_explorer_url() -> Option<String> {
    Some("https://sepolia.etherscan.io".to_string())
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Config(e.to_string()))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            node_url: default_node_url(),
            account: default_account(),
            listen_port: default_listen_port(),
            poll_interval_ms: default_poll_interval_ms(),
            explorer_url: default_explorer_url(),
            price_url: None,
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

//! Configuration for the Amorce discovery tools
//!
//! The tools only need the base URL of the trust API. A TOML file can supply
//! it (plus an optional request timeout) under a `[discovery]` table:
//!
//! ```toml
//! [discovery]
//! trust_url = "http://localhost:8080"
//! timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Production endpoint of the Amorce trust API
pub const DEFAULT_TRUST_URL: &str = "https://amorce-trust-api-425870997313.us-central1.run.app";

/// Settings shared by every discovery tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Base URL of the trust API, without the `/api/v1` suffix
    #[serde(default = "default_trust_url")]
    pub trust_url: String,
    /// Per-request timeout in seconds. Unset means transport defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_trust_url() -> String {
    DEFAULT_TRUST_URL.to_string()
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            trust_url: default_trust_url(),
            timeout_secs: None,
        }
    }
}

/// On-disk layout of a configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to render TOML: {0}")]
    TomlRender(#[from] toml::ser::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DiscoveryConfig {
    /// Load the `[discovery]` table from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.discovery.validate()?;
        Ok(file.discovery)
    }

    /// Render as a TOML document with a `[discovery]` table
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let file = ConfigFile {
            discovery: self.clone(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    /// Override the base URL. An empty override leaves the current URL in place.
    pub fn with_trust_url(mut self, trust_url: Option<&str>) -> Self {
        if let Some(url) = trust_url.filter(|url| !url.is_empty()) {
            self.trust_url = url.to_string();
        }
        self
    }

    /// Request timeout, if one was configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Check values that can only come from a hand-written file
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trust_url.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "discovery.trust_url must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidConfig(
                "discovery.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

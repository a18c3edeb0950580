/*
[INPUT]:  YAML configuration file, CLI overrides, environment
[OUTPUT]: Resolved client settings and wallet private key
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use webdav_web3_client::{ClientConfig, DEFAULT_BASE_URL};

/// Environment variable read for the wallet private key by default
pub const DEFAULT_PRIVATE_KEY_ENV: &str = "WEBDAV_PRIVATE_KEY";

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// API origin (e.g., "http://localhost:6065")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// EVM private key (hex). Prefer the environment variable over storing it here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Whole-request timeout in seconds; transport default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else the default location if it exists, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            if base_url.trim().is_empty() {
                return Err(anyhow!("base_url cannot be empty"));
            }
        }
        if self.timeout_secs == Some(0) {
            return Err(anyhow!("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Client settings; `base_url_override` wins over the file
    pub fn client_config(&self, base_url_override: Option<&str>) -> ClientConfig {
        let base_url = base_url_override
            .map(str::to_string)
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        ClientConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..ClientConfig::with_base_url(base_url)
        }
    }

    /// Private key from the environment variable `env_var`, else from the file
    pub fn private_key(&self, env_var: &str) -> Option<String> {
        std::env::var(env_var)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.private_key.clone())
    }

    /// Write configuration as YAML
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("failed to serialize config to YAML")?;
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }
        std::fs::write(path, yaml)
            .with_context(|| format!("failed to write config to {}", path.display()))
    }
}

/// `<config dir>/webdav-web3/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("webdav-web3").join("config.yaml"))
}

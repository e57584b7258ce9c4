pub mod admin_config;
pub mod api_config;
pub mod contact_config;
pub mod defaults;
pub mod observability_config;
pub mod payment_config;
pub mod storage_config;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use admin_config::{AdminConfig, AdminRule};
pub use api_config::ApiConfig;
pub use contact_config::ContactConfig;
pub use observability_config::ObservabilityConfig;
pub use payment_config::PaymentConfig;
pub use storage_config::{StorageBackend, StorageConfig};

/// Overrides `api.base_url`.
pub const ENV_API_URL: &str = "PAYDAY_API_URL";
/// Overrides `storage.session_path`.
pub const ENV_SESSION_PATH: &str = "PAYDAY_SESSION_PATH";

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PaydayConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub payment: PaymentConfig,
    pub contact: ContactConfig,
    pub admin: AdminConfig,
    pub observability: ObservabilityConfig,
}

impl PaydayConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// `<config_dir>/payday/config.toml`, or `./payday/config.toml` when the
    /// platform has no config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("payday")
            .join("config.toml")
    }

    /// Read and parse `path`. A missing file yields the defaults; an unreadable
    /// or malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        let config = Self::from_toml(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Apply environment overrides from `lookup` (normally `std::env::var`).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(path) = lookup(ENV_SESSION_PATH).filter(|v| !v.trim().is_empty()) {
            self.storage.session_path = Some(path.trim().to_string());
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.payment.validate()?;
        Ok(())
    }
}

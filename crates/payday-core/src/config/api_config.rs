//! Remote API configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. No trailing slash needed.
    pub base_url: String,
    /// Per-request timeout in seconds. Default: none, a stalled request waits forever.
    pub request_timeout_secs: Option<u64>,
    /// Overrides the User-Agent header.
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// `base_url` joined with an endpoint path, with exactly one slash between.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "api.base_url".to_string(),
                message: format!("expected an http(s) URL, got '{url}'"),
            });
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid {
                field: "api.request_timeout_secs".to_string(),
                message: "must be positive; omit it to disable the timeout".to_string(),
            });
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// M-Pesa payment settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Country calling code substituted for the local trunk digit.
    pub country_code: String,
    pub currency: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            country_code: defaults::DEFAULT_COUNTRY_CODE.to_string(),
            currency: defaults::DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl PaymentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.country_code.is_empty() || !self.country_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid {
                field: "payment.country_code".to_string(),
                message: format!("expected digits only, got '{}'", self.country_code),
            });
        }
        Ok(())
    }
}

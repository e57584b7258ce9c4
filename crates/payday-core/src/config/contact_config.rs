use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub whatsapp_number: String,
    pub brand_name: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: defaults::DEFAULT_WHATSAPP_NUMBER.to_string(),
            brand_name: defaults::DEFAULT_BRAND_NAME.to_string(),
        }
    }
}

//! Default values shared by the config sections.

pub const DEFAULT_API_BASE_URL: &str = "https://pay-day-backend.vercel.app/api";
pub const DEFAULT_COUNTRY_CODE: &str = "254";
pub const DEFAULT_CURRENCY: &str = "KES";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "+254711871225";
pub const DEFAULT_BRAND_NAME: &str = "Payday Picks";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const SESSION_FILE_NAME: &str = "session.json";

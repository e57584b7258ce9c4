//! Stable error codes shared by every crate in the workspace.
//! Front ends key their messages and exit statuses off these, never off `Display` text.

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const STORAGE_LOCKED: &str = "STORAGE_LOCKED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const REMOTE_REJECTED: &str = "REMOTE_REJECTED";
pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
pub const DECODE_ERROR: &str = "DECODE_ERROR";
pub const ACTION_BUSY: &str = "ACTION_BUSY";
pub const CANCELLED: &str = "CANCELLED";
pub const SESSION_EXPIRED: &str = "SESSION_EXPIRED";
pub const INVALID_PRICE: &str = "INVALID_PRICE";
pub const BOARD_REJECTED: &str = "BOARD_REJECTED";
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Maps an error onto one of the codes above.
pub trait PaydayErrorCode {
    fn error_code(&self) -> &'static str;
}

//! # payday-core
//!
//! Foundation crate for the Payday Picks client.
//! Defines the data model, plan catalogue, traits, errors, config and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod observability;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PaydayConfig;
pub use errors::error_code::PaydayErrorCode;
pub use errors::{ConfigError, StorageError};
pub use models::{Notice, NoticeLevel, PaymentRequest, Plan, Tip, TipStatus, User};
pub use traits::KeyValueStore;

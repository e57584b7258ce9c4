//! # payday-client
//!
//! Everything that crosses the process boundary.
//!
//! ## Components
//! - **transport**: `HttpTransport` trait, request/response protocol, reqwest-backed `HttpClient`
//! - **api**: typed endpoint calls and server-message extraction
//! - **auth**: local credential validation and the `AuthGateway`
//! - **payment**: phone normalisation, the `PaymentInitiator`, WhatsApp fallback link
//! - **tips**: `TipsFeed`: fetch and partition tips
//! - **profile**: `ProfileDirectory` for the admin menu
//!
//! Every action carries its own busy flag: at most one request in flight per
//! action, no exclusion across actions.

pub mod api;
pub mod auth;
pub mod busy;
pub mod errors;
pub mod payment;
pub mod profile;
pub mod tips;
pub mod transport;

pub use api::{ApiClient, AuthPayload, StkPushReceipt};
pub use auth::{AuthGateway, AuthOutcome, LoginForm, SignupForm};
pub use busy::{BusyFlag, BusyGuard};
pub use errors::{ApiError, AuthError, FeedError, PaymentError, TransportError};
pub use payment::{normalize_phone, PaymentInitiator, PaymentOutcome, PhonePrompt};
pub use profile::ProfileDirectory;
pub use tips::TipsFeed;
pub use transport::{HttpClient, HttpTransport};

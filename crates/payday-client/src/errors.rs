//! Client error types.
//!
//! Three user-visible classes, each with its own surface:
//! validation (inline, no request made), remote rejection (server message),
//! transport failure (generic "try again").

use payday_core::constants::{SERVER_ERROR_MESSAGE, SESSION_EXPIRED_MESSAGE};
use payday_core::errors::error_code::{self, PaydayErrorCode};
use payday_core::{Notice, StorageError};

use crate::auth::validation::ValidationErrors;

/// The request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    TimedOut,

    #[error("cannot reach server: {0}")]
    Unreachable(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::TimedOut
        } else if e.is_connect() || e.is_request() {
            Self::Unreachable(e.to_string())
        } else {
            Self::Client(e.to_string())
        }
    }
}

/// Errors from a single endpoint call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("cannot decode response: {0}")]
    Decode(String),

    #[error("cannot encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// Text to surface to the user: the server's own words for a rejection,
    /// the generic retry message for everything else.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            _ => SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl PaydayErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => error_code::REMOTE_REJECTED,
            Self::Transport(_) => error_code::TRANSPORT_ERROR,
            Self::Decode(_) | Self::Encode(_) => error_code::DECODE_ERROR,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid input: {0}")]
    Validation(ValidationErrors),

    #[error("a {action} request is already in progress")]
    Busy { action: &'static str },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("cannot persist session: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.to_string(),
            Self::Busy { .. } => "Please wait for the current request to finish.".to_string(),
            Self::Api(e) => e.user_message(),
            Self::Storage(_) => SERVER_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn notice(&self) -> Notice {
        Notice::error(self.user_message())
    }
}

impl PaydayErrorCode for AuthError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => error_code::VALIDATION_ERROR,
            Self::Busy { .. } => error_code::ACTION_BUSY,
            Self::Api(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("a payment request is already in progress")]
    Busy,

    #[error("payment cancelled: no phone number entered")]
    Cancelled,

    #[error("session has no user id")]
    SessionExpired,

    #[error("cannot read an amount from price '{price}' of plan '{plan}'")]
    InvalidPrice { plan: String, price: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl PaymentError {
    /// The notification to show, if any. A dismissed prompt is silent.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Cancelled => None,
            Self::Busy => Some(Notice::info("A payment request is already in progress.")),
            Self::SessionExpired => Some(Notice::error(SESSION_EXPIRED_MESSAGE)),
            Self::InvalidPrice { plan, .. } => {
                Some(Notice::error(format!("Plan '{plan}' cannot be purchased right now.")))
            }
            Self::Api(e) => Some(Notice::error(e.user_message())),
        }
    }
}

impl PaydayErrorCode for PaymentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Busy => error_code::ACTION_BUSY,
            Self::Cancelled => error_code::CANCELLED,
            Self::SessionExpired => error_code::SESSION_EXPIRED,
            Self::InvalidPrice { .. } => error_code::INVALID_PRICE,
            Self::Api(e) => e.error_code(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("tips are already loading")]
    Busy,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FeedError {
    pub fn notice(&self) -> Notice {
        match self {
            Self::Busy => Notice::info("Tips are already loading."),
            Self::Api(e) => Notice::error(e.user_message()),
        }
    }
}

impl PaydayErrorCode for FeedError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Busy => error_code::ACTION_BUSY,
            Self::Api(e) => e.error_code(),
        }
    }
}

use payday_client::ApiError;
use payday_core::errors::error_code::{self, PaydayErrorCode};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("no tip with id {0}")]
    NotFound(Uuid),

    #[error("tips can only be settled as won or lost")]
    InvalidSettlement,
}

impl PaydayErrorCode for BoardError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } | Self::InvalidSettlement => error_code::BOARD_REJECTED,
            Self::NotFound(_) => error_code::NOT_FOUND,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("cannot check admin profiles: {0}")]
    Directory(#[from] ApiError),
}

impl PaydayErrorCode for AdminError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Directory(e) => e.error_code(),
        }
    }
}

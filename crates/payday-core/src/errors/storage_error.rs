//! Errors from the key/value storage backends.

use super::error_code::{self, PaydayErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage locked: {message}")]
    Locked { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PaydayErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Locked { .. } => error_code::STORAGE_LOCKED,
            _ => error_code::STORAGE_ERROR,
        }
    }
}

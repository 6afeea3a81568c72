//! Error types for the Kickoff Kings scoring and draft toolkit

use thiserror::Error;


pub type Result<T> = std::result::Result<T, KickoffError>;

#[derive(Error, Debug)]
pub enum KickoffError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Draft session not found: {name}")]
    SessionNotFound { name: String },
}

impl KickoffError {
    /// Shorthand for building an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        KickoffError::InvalidArgument {
            message: message.into(),
        }
    }
}

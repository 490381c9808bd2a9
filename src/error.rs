/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the desktop API client
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport level failure reported by the HTTP client
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Response or request body could not be (de)serialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// A base URL or request path could not be parsed
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Server answered 401
    #[error("unauthorized")]
    Unauthorized,
    /// Server answered 404
    #[error("not found")]
    NotFound,
    /// Server answered 429
    #[error("rate limit exceeded")]
    RateLimitExceeded,
    /// Any other non-success status
    #[error("unexpected status code: {0}")]
    Unexpected(StatusCode),
    /// The credential store failed to answer
    #[error("vault error: {0}")]
    Vault(String),
    /// `client()` was called before `init_client()`
    #[error("client not initialized")]
    ClientNotInitialized,
    /// Caller supplied a value that cannot be used
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Maps a non-success HTTP status onto an error variant
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded,
            other => AppError::Unexpected(other),
        }
    }
}

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when calling an embedding or completion API
#[derive(Error, Debug)]
pub enum HttpApiError {
    /// Invalid request parameters (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid or missing API key (HTTP 401/403)
    #[error("Authentication failed ({0})")]
    Unauthorized(StatusCode),

    /// Model or endpoint not found (HTTP 404)
    #[error("Endpoint not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded - too many requests")]
    RateLimitExceeded,

    /// Server error (HTTP 5xx)
    #[error("Server error ({0}): {1}")]
    ServerError(StatusCode, String),

    /// Network or connection error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    /// Unknown or unexpected status
    #[error("Unknown error ({0}): {1}")]
    UnknownError(StatusCode, String),
}

impl HttpApiError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::InvalidRequest(body),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(status),
            StatusCode::NOT_FOUND => Self::NotFound(body),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimitExceeded,
            status if status.is_server_error() => Self::ServerError(status, body),
            _ => Self::UnknownError(status, body),
        }
    }

    /// Returns true if this error is transient and should be retried
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::RateLimitExceeded | Self::ServerError(_, _) | Self::NetworkError(_)
        )
    }
}

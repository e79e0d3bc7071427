//! Catalog API client error types.

use std::sync::Arc;

/// Errors from the catalog API client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Invalid request parameters, caught before sending.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The configured API base URL does not parse.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The requested record does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Non-success HTTP response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { ApiError::Timeout } else { ApiError::Network(Arc::new(err)) }
    }
}

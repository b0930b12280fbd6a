//! Model endpoint errors

use std::time::Duration;
use thiserror::Error;

/// Wait suggested after a 429 that carries no usable `retry-after` header
const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(60);

/// Errors from a completion call; any of these ends the run
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Rate limited by the model endpoint, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("Model endpoint returned {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Request to model endpoint failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response from model endpoint: {0}")]
    InvalidResponse(String),

    #[error("Model endpoint did not answer within {0:?}")]
    Timeout(Duration),
}

impl LlmError {
    /// Classify a non-success HTTP status with its response body
    pub fn from_status(status: u16, body: String, retry_after: Option<Duration>) -> Self {
        match status {
            429 => LlmError::RateLimited {
                retry_after: retry_after.unwrap_or(DEFAULT_RETRY_AFTER),
            },
            _ => LlmError::ApiError { status, message: body },
        }
    }

    /// Transient failures the client retries with backoff
    ///
    /// A 429 is not retried in-process; it surfaces with its wait time.
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::ApiError { status, .. } => matches!(status, 408 | 500 | 502 | 503 | 504),
            LlmError::Network(_) | LlmError::Timeout(_) => true,
            LlmError::RateLimited { .. } | LlmError::InvalidResponse(_) => false,
        }
    }
}

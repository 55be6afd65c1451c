//! LLM Provider errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Adapter cannot be constructed, e.g. a required API key is missing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    /// Vendor answered 2xx but the body could not be decoded at all.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Blocking worker running the vendor call panicked or was cancelled.
    #[error("Worker task failed: {0}")]
    TaskFailed(String),
}

impl ProviderError {
    /// Vendor HTTP status, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

use thiserror::Error;

/// Error types for the Machine Translation module
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MtError {
    /// Provider is misconfigured (empty API key, unusable HTTP client)
    #[error("Configuration error: {0}")]
    Config(String),
    /// Transport failure, timeout, invalid locale or non-success HTTP status
    #[error("Request error: {0}")]
    Request(String),
    /// The response did not carry exactly one translation result
    #[error("Unexpected response shape: {0}")]
    ResponseShape(String),
}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MtError::Request(format!("request timed out: {}", err))
        } else {
            MtError::Request(err.to_string())
        }
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;

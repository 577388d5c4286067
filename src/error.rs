//! Error Handling Module
//!
//! Unified error type for the crate, including:
//! - Core error types (`LlmError`, `ErrorCategory`)
//! - Type conversions from common error types

use thiserror::Error;

/// Unified error type for all library operations
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP/transport-level error
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The API returned an error response
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Error message from the service
        message: String,
        /// Raw error payload, when the body was parseable JSON
        details: Option<serde_json::Value>,
    },

    /// A response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Input shape is not among the recognized forms
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Client-side configuration problem
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Operation not supported by the Gemini API
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Local I/O failure, e.g. reading an image file from disk
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Coarse error classification, used by callers to decide how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Authentication/authorization failures
    Auth,
    /// Rate limiting by the service
    RateLimit,
    /// Caller-side errors (bad input, bad configuration, 4xx)
    Client,
    /// Service-side errors (5xx)
    Server,
    /// Transport-level failures
    Network,
    /// Encoding/decoding failures
    Serialization,
    /// Local I/O failures
    Io,
}

impl LlmError {
    /// Create an API error without structured details
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Classify the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError { code, .. } => match *code {
                401 | 403 => ErrorCategory::Auth,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Client,
            },
            Self::HttpError(_) => ErrorCategory::Network,
            Self::ParseError(_) => ErrorCategory::Serialization,
            Self::IoError(_) => ErrorCategory::Io,
            Self::InvalidInput(_) | Self::ConfigurationError(_) | Self::UnsupportedOperation(_) => {
                ErrorCategory::Client
            }
        }
    }

    /// Whether retrying the same operation could succeed.
    ///
    /// The crate itself never retries; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit | ErrorCategory::Server | ErrorCategory::Network
        )
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_category_follows_status_code() {
        assert_eq!(LlmError::api_error(401, "bad key").category(), ErrorCategory::Auth);
        assert_eq!(LlmError::api_error(429, "slow down").category(), ErrorCategory::RateLimit);
        assert_eq!(LlmError::api_error(503, "overloaded").category(), ErrorCategory::Server);
        assert_eq!(LlmError::api_error(404, "no such model").category(), ErrorCategory::Client);
    }

    #[test]
    fn retryability_matches_category() {
        assert!(LlmError::api_error(500, "boom").is_retryable());
        assert!(LlmError::HttpError("connection reset".into()).is_retryable());
        assert!(!LlmError::api_error(403, "forbidden").is_retryable());
        assert!(!LlmError::InvalidInput("bad fragment".into()).is_retryable());
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = LlmError::api_error(404, "model not found");
        assert_eq!(err.to_string(), "API error 404: model not found");
    }
}

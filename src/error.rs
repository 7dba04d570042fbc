//! Error types shared by the client and the HTTP transport.
//!
//! Every fallible operation in this crate returns `Result<_, LlmError>`;
//! expected failure paths never panic. Transport failures are carried
//! through `query_chat_model` unchanged, so callers see the same error the
//! transport produced.

use thiserror::Error;

/// Unified error type for client operations.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network-level failure reported by the HTTP transport
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Non-success status returned by the remote API
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Provider error message (raw, as returned by the API)
        message: String,
        /// Optional provider error body for verbose rendering
        details: Option<serde_json::Value>,
    },

    /// JSON serialization or deserialization failure
    #[error("JSON error: {0}")]
    JsonError(String),

    /// The response JSON parsed but lacked the expected shape
    #[error("Response parsing error: {0}")]
    ParseError(String),

    /// Client-side configuration problem
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Invalid caller-supplied input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LlmError {
    /// The raw message, without the variant prefix Display adds.
    ///
    /// `check_configuration` reports this so that a transport failure like
    /// "bad key" surfaces verbatim rather than as "HTTP error: bad key".
    pub fn message(&self) -> String {
        match self {
            Self::HttpError(msg)
            | Self::JsonError(msg)
            | Self::ParseError(msg)
            | Self::ConfigurationError(msg)
            | Self::InvalidInput(msg) => msg.clone(),
            Self::ApiError { message, .. } => message.clone(),
        }
    }

    /// HTTP status code, when this error originated from an API response.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

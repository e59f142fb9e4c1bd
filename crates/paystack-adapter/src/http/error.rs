/*
[INPUT]:  Error sources (argument checks, HTTP, API, decoding, configuration)
[OUTPUT]: Structured error types with status code and raw body context
[POS]:    Error handling layer - the single error type of the SDK
[UPDATE]: When adding error variants or classification helpers
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Paystack adapter
#[derive(Error, Debug)]
pub enum PaystackError {
    /// Caller input violated a local precondition; no request was sent
    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument { name: &'static str, message: String },

    /// Paystack answered with a non-success HTTP status
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: Option<String>,
    },

    /// A success response could not be read as a response envelope
    #[error("Failed to deserialize response: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection timeout
    #[error("Request timed out after {duration}s")]
    Timeout { duration: u64 },

    /// The caller cancelled the in-flight request
    #[error("Request was cancelled")]
    Cancelled,

    /// Request payload serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`PaystackError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    Api,
    Decode,
    Transport,
    Configuration,
}

impl PaystackError {
    /// Create an API error from status code, message and raw body
    pub fn api_error(
        status: StatusCode,
        message: impl Into<String>,
        body: Option<String>,
    ) -> Self {
        PaystackError::Api {
            status: status.as_u16(),
            message: message.into(),
            body,
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        PaystackError::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PaystackError::InvalidArgument { .. } => ErrorKind::Argument,
            PaystackError::Api { .. } => ErrorKind::Api,
            PaystackError::Decode { .. } => ErrorKind::Decode,
            PaystackError::Http(_)
            | PaystackError::Timeout { .. }
            | PaystackError::Cancelled
            | PaystackError::Serialization(_)
            | PaystackError::UrlParse(_) => ErrorKind::Transport,
            PaystackError::Config(_) => ErrorKind::Configuration,
        }
    }

    /// HTTP status reported by Paystack, if the error came from a response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PaystackError::Api { status, .. } => Some(*status),
            PaystackError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body kept for diagnostics
    pub fn response_body(&self) -> Option<&str> {
        match self {
            PaystackError::Api { body, .. } | PaystackError::Decode { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    pub fn is_argument_error(&self) -> bool {
        self.kind() == ErrorKind::Argument
    }

    pub fn is_api_error(&self) -> bool {
        self.kind() == ErrorKind::Api
    }

    pub fn is_decode_error(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }

    pub fn is_transport_error(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}

/// Result type alias for Paystack operations
pub type Result<T> = std::result::Result<T, PaystackError>;

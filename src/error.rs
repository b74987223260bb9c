//! Error types for Amorce discovery operations
//!
//! Every variant here is caught at the tool boundary and turned into text,
//! so the messages are written to be read by an LLM as well as a human.

use thiserror::Error;

/// Main error type for discovery requests
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Invalid URL: {message}")]
    InvalidUrl { message: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status {status} for url ({url})")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected response shape: expected a JSON object, got {found}")]
    UnexpectedShape { found: &'static str },

    #[error("Runtime error: {message}")]
    Runtime { message: String },
}

impl DiscoveryError {
    /// Create invalid URL error
    pub fn invalid_url<S: Into<String>>(message: S) -> Self {
        Self::InvalidUrl {
            message: message.into(),
        }
    }

    /// Create runtime error
    pub fn runtime<S: Into<String>>(message: S) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }

    /// Whether the remote service answered with a non-success status
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

impl From<url::ParseError> for DiscoveryError {
    fn from(err: url::ParseError) -> Self {
        Self::invalid_url(err.to_string())
    }
}

/// Result type for discovery operations
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

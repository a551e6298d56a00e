//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Errors produced by a [`ContactTransport`](crate::traits::ContactTransport).
///
/// This is the seam between the network layer and the submission controller;
/// every variant is mapped into a [`SubmitError`] before it reaches the user.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum TransportError {
    /// The abort signal fired before the request completed.
    #[error("Request cancelled")]
    Cancelled,

    /// The underlying client reported a timeout of its own.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Connection refused, DNS failure, TLS failure and friends.
    #[error("{0}")]
    Network(String),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Failure classes of a submission attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum SubmitError {
    /// Cooperative cancellation was observed or the hard deadline fired.
    #[error("Request timed out")]
    TransportTimeout,

    /// Network-level failure.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// Non-success HTTP status, optionally carrying a server supplied message.
    #[error("Server rejected the request (HTTP {status})")]
    ServerRejected {
        status: u16,
        message: Option<String>,
    },

    /// Response body could not be parsed. Never terminal on its own, the
    /// controller falls back to the default message.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl SubmitError {
    /// Whether this is an expected outcome (user input rejected, slow network),
    /// used for log grading.
    ///
    /// Returns `true` when `warn` is the right level, `false` for `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::TransportTimeout | Self::MalformedResponse(_) => true,
            Self::ServerRejected { status, .. } => (400..500).contains(status),
            Self::TransportFailure(_) => false,
        }
    }
}

impl From<TransportError> for SubmitError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Cancelled | TransportError::Timeout(_) => Self::TransportTimeout,
            TransportError::Network(detail) | TransportError::Body(detail) => {
                Self::TransportFailure(detail)
            }
        }
    }
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON could not be deserialized.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the protocol cannot work with.
    #[error("Invalid value for '{field}': {detail}")]
    InvalidValue { field: &'static str, detail: String },
}

/// Result alias for transport calls.
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Result alias for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

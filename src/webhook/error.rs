//! Error types for webhook resolution and delivery.

use thiserror::Error;

use crate::connection::ConnectionError;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request URL was rejected by the HTTP layer.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The configured proxy could not be used.
    #[error("Invalid proxy '{proxy}': {reason}")]
    InvalidProxy {
        /// The proxy URL as configured
        proxy: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Failure to turn a token and/or connection into a webhook URL.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Neither a token nor a connection yields credentials.
    #[error("No webhook token or connection with a host/token was provided")]
    MissingCredentials,

    /// The connection record could not be looked up.
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// The assembled value is not an absolute URL.
    #[error("Invalid webhook URL: {reason}")]
    InvalidUrl {
        /// Reason for invalidity
        reason: String,
    },
}

/// Error type for a single webhook invocation.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The webhook URL could not be resolved.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ResolveError),

    /// The request could not be delivered.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// Slack answered with a non-2xx status.
    #[error("Webhook rejected with status {status}{}", body.as_deref().map(|b| format!(": {b}")).unwrap_or_default())]
    Rejected {
        /// HTTP status code returned
        status: http::StatusCode,
        /// Response body text, if valid UTF-8
        body: Option<String>,
    },

    /// The message could not be serialized to JSON.
    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl WebhookError {
    /// Returns true if the error stems from configuration rather than delivery.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::connection::ConnectionError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid URL provided.
    #[error("Invalid URL for {field} '{url}': {reason}")]
    InvalidUrl {
        /// Name of the field
        field: &'static str,
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A JSON option is not a JSON array.
    #[error("Invalid JSON for {field}: {reason}")]
    InvalidJson {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Connection records could not be loaded.
    #[error(transparent)]
    Connections(#[from] ConnectionError),
}

/// Well-known field names for `MissingRequired` and friends.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The message text field.
    pub const MESSAGE: &str = "message";
    /// The webhook credentials (token or connection id).
    pub const CREDENTIALS: &str = "webhook_token";
    /// The proxy URL field.
    pub const PROXY: &str = "proxy";
    /// The attachments field.
    pub const ATTACHMENTS: &str = "attachments";
    /// The blocks field.
    pub const BLOCKS: &str = "blocks";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}

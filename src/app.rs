//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use slackhook::config::{ConfigError, field};
use slackhook::connection::ConnectionError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - missing credentials, unresolvable webhook URL, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - network failure, rejected by Slack, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

const INIT_HINT: &str = "Run 'slackhook init' to generate a configuration template.";

/// Returns a follow-up hint for configuration errors a user can act on.
#[must_use]
pub fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::CREDENTIALS => Some(
            "Pass a webhook URL or T.../B.../... token with --webhook-token, \
             or name a stored connection with --http-conn-id.",
        ),
        ConfigError::MissingRequired { .. } | ConfigError::FileRead { .. } => Some(INIT_HINT),
        ConfigError::InvalidJson { .. } => Some(
            "--attachments and --blocks take a JSON array, \
             e.g. '[{\"type\": \"divider\"}]'.",
        ),
        ConfigError::InvalidUrl { field: f, .. } if *f == field::PROXY => {
            Some("Proxy URLs need a scheme, e.g. http://proxy.example.com:8080.")
        }
        ConfigError::Connections(ConnectionError::InvalidExtra { .. }) => Some(
            "A connection's extra must be a JSON object or an inline table, \
             e.g. extra = '{\"webhook_token\": \"T000/B000/XXX\"}'.",
        ),
        ConfigError::Connections(ConnectionError::Read { .. }) => {
            Some("Check the path given with --connections or webhook.connections_file.")
        }
        _ => None,
    }
}

/// Prints the hint for `error`, if there is one.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

//! Configuration layer for slackhook.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! `--attachments` and `--blocks` replace the TOML arrays entirely (not merged).
//!
//! # Boolean Flag Semantics
//!
//! `--link-names` uses OR semantics: if set in either CLI or TOML, the result is `true`.
//!
//! # Connections
//!
//! Connection records come from `[connections.<id>]` tables in the config file
//! and, optionally, from a separate connections file (`--connections` or
//! `webhook.connections_file`). Records from the separate file replace
//! same-named records from the config file.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, expand_tilde, write_default_config};

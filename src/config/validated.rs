//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;
use url::Url;

use crate::connection::{FileConnectionStore, MemoryConnectionStore, store_from_entries};
use crate::hook::WebhookConfig;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// The message and how to reach the webhook
    pub webhook: WebhookConfig,

    /// Connection records available to the resolver
    pub connections: MemoryConnectionStore,

    /// Dry-run mode (log the request without sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let webhook = &self.webhook;

        write!(
            f,
            "Config {{ token: {}, connection: {}, channel: {}, attachments: {}, blocks: {}, \
             link_names: {}, proxy: {}, connections: {}, dry_run: {} }}",
            if webhook.explicit_token.is_some() { "set" } else { "none" },
            webhook.connection_id.as_deref().unwrap_or("none"),
            webhook.channel.as_deref().unwrap_or("default"),
            webhook.attachments.len(),
            webhook.blocks.len(),
            webhook.link_names,
            if webhook.proxy.is_some() { "set" } else { "none" },
            self.connections.len(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Neither a webhook token nor a connection id is given
    /// - No message text, attachments or blocks are given
    /// - `attachments`/`blocks` are not JSON arrays
    /// - The proxy is not a valid URL
    /// - Connection records cannot be loaded
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let webhook_section = toml.map(|t| &t.webhook);
        let message_section = toml.map(|t| &t.message);

        let explicit_token = cli
            .webhook_token
            .clone()
            .or_else(|| webhook_section.and_then(|w| w.webhook_token.clone()));
        let connection_id = cli
            .http_conn_id
            .clone()
            .or_else(|| webhook_section.and_then(|w| w.http_conn_id.clone()));

        if explicit_token.is_none() && connection_id.is_none() {
            return Err(ConfigError::missing(
                field::CREDENTIALS,
                "Use --webhook-token or --http-conn-id, or set them in the [webhook] section",
            ));
        }

        let attachments = Self::resolve_json_array(
            field::ATTACHMENTS,
            cli.attachments.as_deref(),
            message_section.map(|m| m.attachments.as_slice()),
        )?;
        let blocks = Self::resolve_json_array(
            field::BLOCKS,
            cli.blocks.as_deref(),
            message_section.map(|m| m.blocks.as_slice()),
        )?;

        let has_rich_content = !attachments.is_empty() || !blocks.is_empty();
        let message = Self::resolve_message(cli, toml, !has_rich_content)?;
        let proxy = Self::resolve_proxy(cli, toml)?;

        // Flags only enable, never disable
        let link_names = cli.link_names
            || message_section.map_or(defaults::LINK_NAMES, |m| m.link_names);

        let webhook = WebhookConfig {
            explicit_token,
            connection_id,
            message,
            attachments,
            blocks,
            channel: cli
                .channel
                .clone()
                .or_else(|| message_section.and_then(|m| m.channel.clone())),
            username: cli
                .username
                .clone()
                .or_else(|| message_section.and_then(|m| m.username.clone())),
            icon_emoji: cli
                .icon_emoji
                .clone()
                .or_else(|| message_section.and_then(|m| m.icon_emoji.clone())),
            icon_url: cli
                .icon_url
                .clone()
                .or_else(|| message_section.and_then(|m| m.icon_url.clone())),
            link_names,
            proxy,
        };

        let connections = Self::build_connections(cli, toml)?;

        Ok(Self {
            webhook,
            connections,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(&expand_tilde(path))?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_message(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        required: bool,
    ) -> Result<String, ConfigError> {
        let text = cli
            .message
            .clone()
            .or_else(|| toml.and_then(|t| t.message.text.clone()));

        match text {
            Some(text) => Ok(text),
            // Attachments or blocks carry the content
            None if !required => Ok(String::new()),
            None => Err(ConfigError::missing(
                field::MESSAGE,
                "Use --message or set message.text in config file",
            )),
        }
    }

    fn resolve_json_array(
        field: &'static str,
        cli_value: Option<&str>,
        toml_value: Option<&[Value]>,
    ) -> Result<Vec<Value>, ConfigError> {
        let Some(raw) = cli_value else {
            return Ok(toml_value.map(<[Value]>::to_vec).unwrap_or_default());
        };

        let value: Value = serde_json::from_str(raw).map_err(|e| ConfigError::InvalidJson {
            field,
            reason: e.to_string(),
        })?;

        match value {
            Value::Array(items) => Ok(items),
            _ => Err(ConfigError::InvalidJson {
                field,
                reason: "expected a JSON array".to_string(),
            }),
        }
    }

    fn resolve_proxy(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<String>, ConfigError> {
        let proxy = cli
            .proxy
            .clone()
            .or_else(|| toml.and_then(|t| t.webhook.proxy.clone()));

        if let Some(ref proxy) = proxy {
            Url::parse(proxy).map_err(|e| ConfigError::InvalidUrl {
                field: field::PROXY,
                url: proxy.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(proxy)
    }

    fn build_connections(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<MemoryConnectionStore, ConfigError> {
        let mut connections = match toml {
            Some(toml) => store_from_entries(toml.connections.clone())?,
            None => MemoryConnectionStore::new(),
        };

        // CLI takes precedence
        let file = cli.connections_file.clone().or_else(|| {
            toml.and_then(|t| t.webhook.connections_file.as_ref().map(PathBuf::from))
        });

        if let Some(path) = file {
            let store = FileConnectionStore::load(expand_tilde(&path))?;
            connections.merge(store.into_records());
        }

        Ok(connections)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and all paths when the home directory is
/// unknown, are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}

//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::connection::ConnectionEntry;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook credentials and transport section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Message content section
    #[serde(default)]
    pub message: MessageSection,

    /// Connection records, keyed by connection id
    #[serde(default)]
    pub connections: BTreeMap<String, ConnectionEntry>,
}

/// Webhook credentials and transport section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Connection id to read host/token from
    pub http_conn_id: Option<String>,

    /// Webhook token, full URL, or path suffix
    pub webhook_token: Option<String>,

    /// Proxy URL
    pub proxy: Option<String>,

    /// Path to a separate connections file
    pub connections_file: Option<String>,
}

/// Message content section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    /// Message text
    pub text: Option<String>,

    /// Channel override
    pub channel: Option<String>,

    /// Bot user name override
    pub username: Option<String>,

    /// Emoji icon override
    pub icon_emoji: Option<String>,

    /// Image icon override
    pub icon_url: Option<String>,

    /// Link `@names` and `#channels`
    #[serde(default)]
    pub link_names: bool,

    /// Legacy attachments
    #[serde(default)]
    pub attachments: Vec<serde_json::Value>,

    /// Block Kit blocks
    #[serde(default)]
    pub blocks: Vec<serde_json::Value>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# slackhook configuration file

[webhook]
# Either a full webhook URL, or a token appended to
# https://hooks.slack.com/services/ (or to the connection's host, when
# http_conn_id is also set)
# webhook_token = "T000/B000/XXX"

# Connection to read host/token from (see [connections] below)
# http_conn_id = "slack-default"

# Proxy to route the request through
# proxy = "https://proxy.example.com:8080"

# Separate file with [connections.<id>] tables; its records replace
# same-named records below
# connections_file = "~/.config/slackhook/connections.toml"

[message]
# Message text (can be overridden by --message)
# text = "Deployment finished"

# channel = "#general"
# username = "deploy-bot"
# icon_emoji = ":rocket:"
# icon_url = "https://example.com/icon.png"

# Link @names and #channels in the text
# link_names = false

# Legacy attachments and Block Kit blocks are passed through as-is
# [[message.attachments]]
# fallback = "Required plain-text summary"
#
# [[message.blocks]]
# type = "section"
# text = { type = "mrkdwn", text = "*bold text*" }

# Connection records. The token is taken from extra.webhook_token, then
# password; the host defaults to https://hooks.slack.com/services/
# [connections.slack-default]
# extra = '{"webhook_token": "T000/B000/XXX"}'
#
# [connections.slack-team-host]
# host = "https://hooks.slack.com/services/T000/"
"##
    .to_string()
}

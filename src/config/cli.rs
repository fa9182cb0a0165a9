//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// slackhook: post a message to a Slack incoming webhook
///
/// The webhook URL is resolved from `--webhook-token` (a full URL or a
/// token appended to the Slack webhook host) and/or `--http-conn-id`
/// (a connection defined in the config or connections file).
#[derive(Debug, Parser)]
#[command(name = "slackhook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Connection to read the webhook host/token from
    #[arg(long = "http-conn-id", value_name = "ID")]
    pub http_conn_id: Option<String>,

    /// Webhook token, full webhook URL, or path suffix for the connection's host
    #[arg(long = "webhook-token", value_name = "TOKEN")]
    pub webhook_token: Option<String>,

    /// Message text
    #[arg(long, short)]
    pub message: Option<String>,

    /// Attachments as a JSON array
    #[arg(long, value_name = "JSON")]
    pub attachments: Option<String>,

    /// Block Kit blocks as a JSON array
    #[arg(long, value_name = "JSON")]
    pub blocks: Option<String>,

    /// Channel to post to, overriding the webhook's default
    #[arg(long)]
    pub channel: Option<String>,

    /// Bot user name, overriding the webhook's default
    #[arg(long)]
    pub username: Option<String>,

    /// Emoji to use as the bot icon (e.g. `:ghost:`)
    #[arg(long = "icon-emoji")]
    pub icon_emoji: Option<String>,

    /// Image URL to use as the bot icon
    #[arg(long = "icon-url")]
    pub icon_url: Option<String>,

    /// Link `@names` and `#channels` in the message
    #[arg(long = "link-names")]
    pub link_names: bool,

    /// Proxy URL to route the request through
    #[arg(long)]
    pub proxy: Option<String>,

    /// Path to a TOML file with `[connections.<id>]` tables
    #[arg(long = "connections", value_name = "FILE")]
    pub connections_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Resolve and build the message, log it, but do not send it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for slackhook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}

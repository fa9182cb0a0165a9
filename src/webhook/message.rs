//! Slack message payload construction.

use serde::Serialize;
use serde_json::Value;

use crate::hook::WebhookConfig;

/// A message in the shape the Slack incoming-webhook API expects.
///
/// Optional fields are omitted from the JSON when unset (or empty);
/// `link_names` is always present as `0` or `1`. Keys are serialized in
/// declaration order, so the same message always yields the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlackMessage {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    blocks: Vec<Value>,
    link_names: u8,
}

impl SlackMessage {
    /// Creates a plain-text message.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Overrides the channel the webhook posts to.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = present(channel.into());
        self
    }

    /// Overrides the bot user name.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = present(username.into());
        self
    }

    /// Sets the emoji used as the bot icon.
    #[must_use]
    pub fn with_icon_emoji(mut self, icon_emoji: impl Into<String>) -> Self {
        self.icon_emoji = present(icon_emoji.into());
        self
    }

    /// Sets the image URL used as the bot icon.
    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = present(icon_url.into());
        self
    }

    /// Sets the legacy attachments.
    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<Value>) -> Self {
        self.attachments = attachments;
        self
    }

    /// Sets the Block Kit blocks.
    #[must_use]
    pub fn with_blocks(mut self, blocks: Vec<Value>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Enables linking of `@names` and `#channels` in the text.
    #[must_use]
    pub fn with_link_names(mut self, link_names: bool) -> Self {
        self.link_names = u8::from(link_names);
        self
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Serializes the message into the request body.
    ///
    /// # Errors
    ///
    /// Returns an error if an attachment or block cannot be serialized.
    pub fn build(&self) -> Result<MessagePayload, serde_json::Error> {
        serde_json::to_string(self).map(MessagePayload)
    }
}

impl From<&WebhookConfig> for SlackMessage {
    fn from(config: &WebhookConfig) -> Self {
        let message = Self::new(config.message.clone())
            .with_attachments(config.attachments.clone())
            .with_blocks(config.blocks.clone())
            .with_link_names(config.link_names);

        let message = config.channel.iter().fold(message, |m, v| m.with_channel(v));
        let message = config.username.iter().fold(message, |m, v| m.with_username(v));
        let message = config.icon_emoji.iter().fold(message, |m, v| m.with_icon_emoji(v));
        config.icon_url.iter().fold(message, |m, v| m.with_icon_url(v))
    }
}

fn present(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Serialized JSON body of a webhook request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePayload(String);

impl MessagePayload {
    /// Returns the JSON text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the JSON bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the length of the body in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the body is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

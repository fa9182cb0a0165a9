//! One-shot Slack webhook invocation.
//!
//! [`SlackWebhookHook`] resolves the webhook URL, builds the message payload
//! and posts it. Every call is independent; the hook keeps no state between
//! invocations beyond the configuration it was built with.

use serde_json::Value;

use crate::connection::ConnectionStore;
use crate::webhook::{
    HttpClient, HttpError, MessagePayload, ReqwestClient, ResolveError, SlackMessage,
    SlackWebhook, WebhookError, resolve_token, resolve_url,
};

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;

/// Everything needed to post one message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebhookConfig {
    /// Webhook token, full webhook URL, or path suffix for the connection's host
    pub explicit_token: Option<String>,
    /// Identifier of the stored connection to read host/token from
    pub connection_id: Option<String>,
    /// Message text
    pub message: String,
    /// Legacy attachments, passed through as-is
    pub attachments: Vec<Value>,
    /// Block Kit blocks, passed through as-is
    pub blocks: Vec<Value>,
    /// Channel override
    pub channel: Option<String>,
    /// Bot user name override
    pub username: Option<String>,
    /// Emoji icon override
    pub icon_emoji: Option<String>,
    /// Image icon override
    pub icon_url: Option<String>,
    /// Link `@names` and `#channels` in the text
    pub link_names: bool,
    /// Proxy URL to route the request through
    pub proxy: Option<String>,
}

/// Posts a message described by a [`WebhookConfig`].
///
/// # Example
///
/// ```no_run
/// use slackhook::connection::MemoryConnectionStore;
/// use slackhook::hook::{SlackWebhookHook, WebhookConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WebhookConfig {
///     explicit_token: Some("T000/B000/XXX".to_string()),
///     message: "Deploy finished".to_string(),
///     ..WebhookConfig::default()
/// };
/// let store = MemoryConnectionStore::new();
/// let hook = SlackWebhookHook::new(config, &store);
/// hook.execute(hook.http_client()?).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SlackWebhookHook<'a, C: ?Sized> {
    config: WebhookConfig,
    connections: &'a C,
}

impl<'a, C: ConnectionStore + ?Sized> SlackWebhookHook<'a, C> {
    /// Creates a hook reading connection records from `connections`.
    #[must_use]
    pub const fn new(config: WebhookConfig, connections: &'a C) -> Self {
        Self {
            config,
            connections,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &WebhookConfig {
        &self.config
    }

    /// Returns the token the webhook URL is built from, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured connection cannot be looked up.
    pub fn token(&self) -> Result<Option<String>, ResolveError> {
        resolve_token(
            self.config.explicit_token.as_deref(),
            self.config.connection_id.as_deref(),
            self.connections,
        )
    }

    /// Resolves the webhook URL.
    ///
    /// # Errors
    ///
    /// Returns an error if no URL can be formed from the configuration.
    pub fn resolve_url(&self) -> Result<url::Url, ResolveError> {
        resolve_url(
            self.config.explicit_token.as_deref(),
            self.config.connection_id.as_deref(),
            self.connections,
        )
    }

    /// Builds the JSON payload for the configured message.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Serialize`] if the payload cannot be serialized.
    pub fn build_message(&self) -> Result<MessagePayload, WebhookError> {
        Ok(SlackMessage::from(&self.config).build()?)
    }

    /// Creates the production HTTP client, routed through the configured proxy.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidProxy`] if the proxy URL is invalid.
    pub fn http_client(&self) -> Result<ReqwestClient, HttpError> {
        self.config
            .proxy
            .as_deref()
            .map_or_else(|| Ok(ReqwestClient::new()), ReqwestClient::with_proxy)
    }

    /// Resolves, builds and posts the message using `client`.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Configuration`] if the URL cannot be resolved;
    /// any transport error or non-2xx response is passed through unchanged.
    pub async fn execute<H: HttpClient>(&self, client: H) -> Result<(), WebhookError> {
        let url = self.resolve_url()?;
        let payload = self.build_message()?;

        SlackWebhook::new(client, url).send(&payload).await
    }
}

//! Delivery of a single message to a resolved webhook URL.

use http::HeaderValue;
use http::header::CONTENT_TYPE;

use super::resolve::redacted;
use super::{HttpClient, HttpRequest, MessagePayload, WebhookError};

/// Posts message payloads to one Slack incoming-webhook URL.
///
/// Each [`send`](Self::send) issues exactly one POST request. Failures are
/// returned to the caller as they are; nothing is retried.
///
/// # Example
///
/// ```
/// use slackhook::webhook::{ReqwestClient, SlackWebhook};
/// use url::Url;
///
/// let webhook = SlackWebhook::new(
///     ReqwestClient::new(),
///     Url::parse("https://hooks.slack.com/services/T000/B000/XXX").unwrap(),
/// );
/// ```
#[derive(Debug)]
pub struct SlackWebhook<H> {
    client: H,
    url: url::Url,
}

impl<H> SlackWebhook<H> {
    /// Creates a sender for the given URL.
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self { client, url }
    }

    /// Returns the target URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }
}

impl<H: HttpClient> SlackWebhook<H> {
    /// Builds the POST request carrying the payload.
    fn build_request(&self, payload: &MessagePayload) -> HttpRequest {
        HttpRequest::post(self.url.clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_body(payload.as_bytes().to_vec())
    }

    /// Sends the payload.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Transport`] if the request cannot be
    /// delivered, or [`WebhookError::Rejected`] if Slack answers with a
    /// non-2xx status.
    pub async fn send(&self, payload: &MessagePayload) -> Result<(), WebhookError> {
        let request = self.build_request(payload);
        tracing::debug!(
            url = %redacted(&self.url),
            bytes = payload.len(),
            "Posting message to webhook"
        );

        let response = self.client.request(request).await?;

        if response.is_success() {
            tracing::info!(status = %response.status, "Message delivered");
            return Ok(());
        }

        Err(WebhookError::Rejected {
            status: response.status,
            body: response.body_text().map(ToString::to_string),
        })
    }
}

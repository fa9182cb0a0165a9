//! Application execution logic.
//!
//! Posts the configured message once, or only logs it in dry-run mode.

use thiserror::Error;

use slackhook::config::ValidatedConfig;
use slackhook::connection::ConnectionStore;
use slackhook::hook::SlackWebhookHook;
use slackhook::webhook::{HttpClient, HttpError, WebhookError, redacted};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to create the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] HttpError),

    /// Resolving, building or posting the message failed.
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

impl RunError {
    /// Returns true if the failure stems from the configuration rather than
    /// the network or the remote endpoint.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        match self {
            Self::Client(HttpError::InvalidProxy { .. }) => true,
            Self::Client(_) => false,
            Self::Webhook(e) => e.is_configuration(),
        }
    }
}

/// Executes one webhook invocation with the production HTTP client.
///
/// # Errors
///
/// Returns an error if the client cannot be created or the message cannot
/// be delivered.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let hook = SlackWebhookHook::new(config.webhook, &config.connections);
    let client = hook.http_client()?;

    send(&hook, client, config.dry_run).await
}

/// Resolves and builds the message, then posts it through `client` unless
/// `dry_run` is set.
async fn send<C, H>(
    hook: &SlackWebhookHook<'_, C>,
    client: H,
    dry_run: bool,
) -> Result<(), RunError>
where
    C: ConnectionStore + ?Sized,
    H: HttpClient,
{
    if dry_run {
        tracing::info!("Dry-run mode enabled - the message will be logged but not sent");

        let url = hook.resolve_url().map_err(WebhookError::from)?;
        let payload = hook.build_message()?;

        tracing::info!(url = %redacted(&url), "Dry-run: would post {} bytes", payload.len());
        tracing::info!("Payload: {}", payload.as_str());
        return Ok(());
    }

    match hook.execute(client).await {
        Err(e @ WebhookError::Rejected { .. }) => {
            tracing::warn!("Slack did not accept the message");
            Err(e.into())
        }
        result => Ok(result?),
    }
}

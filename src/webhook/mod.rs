//! Webhook layer: URL resolution, message payloads and delivery.
//!
//! This module provides:
//! - Webhook URL resolution ([`resolve_url`], [`resolve_token`], [`TokenSource`])
//! - Slack message payloads ([`SlackMessage`], [`MessagePayload`])
//! - HTTP request/response types and client abstraction ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Single-shot delivery ([`SlackWebhook`])

mod client;
mod error;
mod http;
mod message;
mod resolve;
mod sender;

#[cfg(test)]
mod sender_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, ResolveError, WebhookError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use message::{MessagePayload, SlackMessage};
pub use resolve::{DEFAULT_WEBHOOK_HOST, TokenSource, redacted, resolve_token, resolve_url};
pub use sender::SlackWebhook;

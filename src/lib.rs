//! slackhook: Slack incoming-webhook client
//!
//! A library for posting messages to Slack incoming webhooks, resolving the
//! webhook URL from an explicit token or a stored connection record.

pub mod config;
pub mod connection;
pub mod hook;
pub mod webhook;

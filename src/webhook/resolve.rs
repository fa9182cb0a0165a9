//! Webhook URL resolution from an explicit token and/or a stored connection.
//!
//! The inputs are first classified into a [`TokenSource`], then resolved by a
//! priority-ordered table:
//!
//! 1. An explicit token that is already an absolute URL is used as-is.
//! 2. A bare explicit token without a connection is appended to
//!    [`DEFAULT_WEBHOOK_HOST`].
//! 3. With a connection only, the token comes from `extra.webhook_token`,
//!    then `password`; the host comes from the record, then
//!    [`DEFAULT_WEBHOOK_HOST`].
//! 4. When both are given, the explicit token is the path suffix of the
//!    connection's host. Tokens stored on the record are ignored.

use url::Url;

use crate::connection::ConnectionStore;

use super::ResolveError;

/// Host that bare tokens are appended to.
pub const DEFAULT_WEBHOOK_HOST: &str = "https://hooks.slack.com/services/";

/// Where the webhook URL comes from, after classifying the raw inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource<'a> {
    /// Explicit token that is a full URL.
    Url(&'a str),
    /// Bare explicit token, no connection.
    Token(&'a str),
    /// Connection only.
    Connection(&'a str),
    /// Connection plus an explicit token used as path suffix.
    ConnectionWithSuffix {
        /// Connection identifier
        id: &'a str,
        /// Explicit token
        suffix: &'a str,
    },
    /// Nothing usable was supplied.
    Missing,
}

impl<'a> TokenSource<'a> {
    /// Classifies the raw inputs. Blank strings count as absent.
    #[must_use]
    pub fn classify(explicit_token: Option<&'a str>, connection_id: Option<&'a str>) -> Self {
        let token = explicit_token.map(str::trim).filter(|t| !t.is_empty());
        let connection = connection_id.map(str::trim).filter(|c| !c.is_empty());

        match (token, connection) {
            (Some(url), _) if is_absolute_url(url) => Self::Url(url),
            (Some(token), None) => Self::Token(token),
            (Some(suffix), Some(id)) => Self::ConnectionWithSuffix { id, suffix },
            (None, Some(id)) => Self::Connection(id),
            (None, None) => Self::Missing,
        }
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Url(_) => "url",
            Self::Token(_) => "token",
            Self::Connection(_) => "connection",
            Self::ConnectionWithSuffix { .. } => "connection+suffix",
            Self::Missing => "missing",
        }
    }
}

/// Returns the token the resolver would use, without building a URL.
///
/// An explicit token always wins. For a connection alone this is
/// `extra.webhook_token`, then `password`.
///
/// # Errors
///
/// Returns [`ResolveError::Connection`] if the connection cannot be looked up.
pub fn resolve_token<S>(
    explicit_token: Option<&str>,
    connection_id: Option<&str>,
    store: &S,
) -> Result<Option<String>, ResolveError>
where
    S: ConnectionStore + ?Sized,
{
    let token = match TokenSource::classify(explicit_token, connection_id) {
        TokenSource::Url(token)
        | TokenSource::Token(token)
        | TokenSource::ConnectionWithSuffix { suffix: token, .. } => Some(token.to_string()),
        TokenSource::Connection(id) => store.get(id)?.token().map(ToString::to_string),
        TokenSource::Missing => None,
    };

    Ok(token)
}

/// Resolves the webhook URL.
///
/// # Errors
///
/// Returns an error if:
/// - Neither a token nor a connection is given ([`ResolveError::MissingCredentials`])
/// - The connection is unknown ([`ResolveError::Connection`])
/// - The connection has neither host nor token ([`ResolveError::MissingCredentials`])
/// - The result is not an absolute URL ([`ResolveError::InvalidUrl`])
pub fn resolve_url<S>(
    explicit_token: Option<&str>,
    connection_id: Option<&str>,
    store: &S,
) -> Result<Url, ResolveError>
where
    S: ConnectionStore + ?Sized,
{
    let source = TokenSource::classify(explicit_token, connection_id);
    tracing::debug!(source = source.kind(), "Resolving webhook URL");

    let raw = match source {
        TokenSource::Url(url) => url.to_string(),
        TokenSource::Token(token) => join_url(DEFAULT_WEBHOOK_HOST, token),
        TokenSource::Connection(id) => {
            let record = store.get(id)?;
            url_from_connection(record.host(), record.token())?
        }
        TokenSource::ConnectionWithSuffix { id, suffix } => {
            url_from_connection(store.get(id)?.host(), Some(suffix))?
        }
        TokenSource::Missing => return Err(ResolveError::MissingCredentials),
    };

    parse_absolute(&raw)
}

fn url_from_connection(host: Option<&str>, token: Option<&str>) -> Result<String, ResolveError> {
    match (host, token) {
        (_, Some(url)) if is_absolute_url(url) => Ok(url.to_string()),
        (Some(host), Some(token)) => Ok(join_url(&with_scheme(host), token)),
        (None, Some(token)) => Ok(join_url(DEFAULT_WEBHOOK_HOST, token)),
        (Some(host), None) => Ok(with_scheme(host)),
        (None, None) => Err(ResolveError::MissingCredentials),
    }
}

/// Joins host and token with exactly one `/` between them.
fn join_url(host: &str, token: &str) -> String {
    let host = host.trim_end_matches('/');
    let token = token.trim_start_matches('/');
    format!("{host}/{token}")
}

fn with_scheme(host: &str) -> String {
    if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}

fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| url.has_host())
}

fn parse_absolute(raw: &str) -> Result<Url, ResolveError> {
    let url = Url::parse(raw).map_err(|e| ResolveError::InvalidUrl {
        reason: e.to_string(),
    })?;

    if !url.has_host() {
        return Err(ResolveError::InvalidUrl {
            reason: "URL has no host".to_string(),
        });
    }

    Ok(url)
}

/// Renders a URL for logs with its path (which carries the token) hidden.
#[must_use]
pub fn redacted(url: &Url) -> String {
    format!(
        "{}://{}/<redacted>",
        url.scheme(),
        url.host_str().unwrap_or_default()
    )
}

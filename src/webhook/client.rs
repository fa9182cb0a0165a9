//! Production HTTP client implementation using reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` implementing [`HttpClient`].
/// Inherits reqwest's default configuration, including its timeouts.
///
/// # Example
///
/// ```no_run
/// use slackhook::webhook::{ReqwestClient, HttpClient, HttpRequest};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::with_proxy("https://proxy.example.com:8080")?;
/// let url = Url::parse("https://hooks.slack.com/services/T000/B000/XXX")?;
/// let request = HttpRequest::post(url).with_body(br#"{"text":"hi"}"#.to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a client that routes every request through `proxy`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidProxy`] if the proxy URL is invalid
    /// or the client cannot be built with it.
    pub fn with_proxy(proxy: &str) -> Result<Self, HttpError> {
        let invalid = |e: reqwest::Error| HttpError::InvalidProxy {
            proxy: proxy.to_string(),
            reason: e.to_string(),
        };

        let inner = reqwest::Client::builder()
            .proxy(reqwest::Proxy::all(proxy).map_err(invalid)?)
            .build()
            .map_err(invalid)?;

        Ok(Self { inner })
    }

    /// Creates an HTTP client from an existing reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, body))
    }
}

//! Tests for `SlackWebhook`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{
    HttpClient, HttpError, HttpRequest, HttpResponse, SlackMessage, SlackWebhook, WebhookError,
};

/// Mock HTTP client that returns a configurable sequence of responses.
#[derive(Debug)]
struct MockClient {
    responses: std::sync::Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: std::sync::Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses),
            requests: std::sync::Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn with_status(status: http::StatusCode, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::new(status, body.as_bytes().to_vec()))])
    }

    fn success() -> Self {
        Self::with_status(http::StatusCode::OK, "ok")
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

fn test_url() -> url::Url {
    url::Url::parse("https://hooks.slack.com/services/T000/B000/XXX").unwrap()
}

mod request {
    use super::*;

    #[tokio::test]
    async fn posts_json_body_to_url() {
        let client = Arc::new(MockClient::success());
        let webhook = SlackWebhook::new(Arc::clone(&client), test_url());
        let payload = SlackMessage::new("hello").build().unwrap();

        webhook.send(&payload).await.unwrap();

        let requests = client.captured_requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.url, test_url());
        assert_eq!(request.body.as_deref(), Some(payload.as_bytes()));
    }

    #[tokio::test]
    async fn sets_json_content_type() {
        let client = Arc::new(MockClient::success());
        let webhook = SlackWebhook::new(Arc::clone(&client), test_url());
        let payload = SlackMessage::new("hello").build().unwrap();

        webhook.send(&payload).await.unwrap();

        let requests = client.captured_requests();
        assert_eq!(
            requests[0].headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn url_accessor_returns_target() {
        let webhook = SlackWebhook::new(MockClient::success(), test_url());
        assert_eq!(webhook.url(), &test_url());
    }
}

mod outcome {
    use super::*;

    #[tokio::test]
    async fn no_content_counts_as_success() {
        let client = MockClient::with_status(http::StatusCode::NO_CONTENT, "");
        let webhook = SlackWebhook::new(client, test_url());
        let payload = SlackMessage::new("hello").build().unwrap();

        assert!(webhook.send(&payload).await.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_is_rejected_with_body() {
        let client = MockClient::with_status(http::StatusCode::FORBIDDEN, "invalid_token");
        let webhook = SlackWebhook::new(client, test_url());
        let payload = SlackMessage::new("hello").build().unwrap();

        let err = webhook.send(&payload).await.unwrap_err();

        match err {
            WebhookError::Rejected { status, body } => {
                assert_eq!(status, http::StatusCode::FORBIDDEN);
                assert_eq!(body.as_deref(), Some("invalid_token"));
            }
            other => panic!("Expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_is_not_retried() {
        let client = Arc::new(MockClient::new(vec![
            Ok(HttpResponse::new(
                http::StatusCode::INTERNAL_SERVER_ERROR,
                vec![],
            )),
            Ok(HttpResponse::new(http::StatusCode::OK, vec![])),
        ]));
        let webhook = SlackWebhook::new(Arc::clone(&client), test_url());
        let payload = SlackMessage::new("hello").build().unwrap();

        let result = webhook.send(&payload).await;

        assert!(matches!(result, Err(WebhookError::Rejected { .. })));
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn transport_error_is_passed_through() {
        let client = Arc::new(MockClient::new(vec![Err(HttpError::Timeout)]));
        let webhook = SlackWebhook::new(Arc::clone(&client), test_url());
        let payload = SlackMessage::new("hello").build().unwrap();

        let err = webhook.send(&payload).await.unwrap_err();

        assert!(matches!(err, WebhookError::Transport(HttpError::Timeout)));
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn invalid_url_from_transport_is_passed_through() {
        let client = MockClient::new(vec![Err(HttpError::InvalidUrl(
            "builder error".to_string(),
        ))]);
        let webhook = SlackWebhook::new(client, test_url());
        let payload = SlackMessage::new("hello").build().unwrap();

        let err = webhook.send(&payload).await.unwrap_err();

        assert!(matches!(
            err,
            WebhookError::Transport(HttpError::InvalidUrl(_))
        ));
    }
}

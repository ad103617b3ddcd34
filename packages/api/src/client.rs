//! # Spreadsheet webhook client
//!
//! [`SheetsClient`] is the [`Registrar`] used by the app. It talks to a single
//! webhook URL (see [`EndpointConfig`]):
//!
//! | Operation | Request | Failure handling |
//! |-----------|---------|------------------|
//! | `check_duplicate` | `GET <url>?email=..&phone=..` | Logged, answered with "no duplicate" so the user is never blocked by a broken lookup. |
//! | `submit` | `POST <url>` with the JSON record as body | Classified by [`interpret_submission`] and returned to the caller. No retries. |
//!
//! The POST body is sent without a JSON content type. In the browser that keeps
//! it a CORS "simple request", which the webhook host accepts without a
//! preflight.
//!
//! Without a configured URL both operations are no-ops: the duplicate check
//! reports nothing and `submit` reports [`SubmitOutcome::Skipped`].

use registration::{
    DuplicateCheckResult, Registrar, SubmissionError, SubmissionRecord, SubmitOutcome,
};
use reqwest::{Client, Url};

use crate::config::EndpointConfig;
use crate::response::{interpret_submission, parse_duplicate_reply, DuplicateCheckError};

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(20);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

#[derive(Clone, Debug)]
struct Endpoint {
    http: Client,
    url: Url,
}

/// Remote submission client for the spreadsheet webhook. Cheap to clone.
#[derive(Clone, Debug)]
pub struct SheetsClient {
    endpoint: Option<Endpoint>,
}

impl SheetsClient {
    /// Build a client for the configured endpoint.
    pub fn new(config: EndpointConfig) -> Result<Self, ClientError> {
        let Some(url) = config.url else {
            return Ok(Self::disabled());
        };
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(REQUEST_TIMEOUT);
        Ok(Self::with_http(builder.build()?, url))
    }

    /// Build a client from [`EndpointConfig::from_env`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(EndpointConfig::from_env())
    }

    /// Use an existing reqwest client.
    pub fn with_http(http: Client, url: Url) -> Self {
        Self {
            endpoint: Some(Endpoint { http, url }),
        }
    }

    /// A client that never touches the network.
    pub fn disabled() -> Self {
        Self { endpoint: None }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    async fn lookup(
        endpoint: &Endpoint,
        email: &str,
        phone: &str,
    ) -> Result<DuplicateCheckResult, DuplicateCheckError> {
        let response = endpoint
            .http
            .get(endpoint.url.clone())
            .query(&[("email", email), ("phone", phone)])
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        parse_duplicate_reply(status, &body)
    }
}

impl Registrar for SheetsClient {
    async fn check_duplicate(&self, email: &str, phone: &str) -> DuplicateCheckResult {
        let Some(endpoint) = &self.endpoint else {
            tracing::warn!("webhook URL not configured; skipping duplicate check");
            return DuplicateCheckResult::none();
        };
        match Self::lookup(endpoint, email, phone).await {
            Ok(found) => found,
            Err(e) => {
                tracing::error!(error = %e, "failed to check duplicate submission");
                DuplicateCheckResult::none()
            }
        }
    }

    async fn submit(&self, submission: &SubmissionRecord) -> Result<SubmitOutcome, SubmissionError> {
        let Some(endpoint) = &self.endpoint else {
            tracing::warn!("webhook URL not configured; submission skipped");
            return Ok(SubmitOutcome::Skipped);
        };

        let body = serde_json::to_string(submission)
            .map_err(|e| SubmissionError::Encode(e.to_string()))?;
        tracing::debug!(category = %submission.category, "sending submission to webhook");

        let response = endpoint
            .http
            .post(endpoint.url.clone())
            .body(body)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            // The status alone decides error replies.
            Err(_) if status >= 400 => String::new(),
            Err(e) => return Err(SubmissionError::Transport(e.to_string())),
        };
        tracing::debug!(status, body = %text, "webhook replied");

        interpret_submission(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registration::{Category, UserRecord};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Accept one connection, answer with `status`/`body`, and hand back the raw request.
    async fn serve_once(status: u16, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = Url::parse(&format!("http://{}/exec", listener.local_addr().unwrap())).unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status} Stub\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (url, handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn client_for(url: Url) -> SheetsClient {
        let http = Client::builder().no_proxy().build().unwrap();
        SheetsClient::with_http(http, url)
    }

    fn submission() -> SubmissionRecord {
        SubmissionRecord::new(
            UserRecord::new("Hong", "010-1234-5678", "hong@example.com"),
            Category::Interest,
            None,
        )
    }

    #[tokio::test]
    async fn test_duplicate_check_sends_query() {
        let (url, server) =
            serve_once(200, r#"{"exists":true,"type":"interest","name":"Hong"}"#).await;
        let client = client_for(url);

        let found = client
            .check_duplicate("hong@example.com", "010-1234-5678")
            .await;

        assert_eq!(found, DuplicateCheckResult::found(Category::Interest, "Hong"));
        let request = server.await.unwrap();
        assert!(
            request.starts_with("GET /exec?email=hong%40example.com&phone=010-1234-5678 "),
            "unexpected request: {request}"
        );
    }

    #[tokio::test]
    async fn test_duplicate_check_fails_open_on_server_error() {
        let (url, server) = serve_once(500, "Internal Server Error").await;
        let client = client_for(url);

        let found = client
            .check_duplicate("hong@example.com", "010-1234-5678")
            .await;

        assert_eq!(found, DuplicateCheckResult::none());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_check_fails_open_on_garbage() {
        let (url, server) = serve_once(200, "<html>sign in</html>").await;
        let client = client_for(url);

        assert_eq!(
            client.check_duplicate("a@example.com", "010-0000-0000").await,
            DuplicateCheckResult::none()
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_check_fails_open_when_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = client_for(Url::parse(&format!("http://{addr}/exec")).unwrap());

        assert_eq!(
            client.check_duplicate("a@example.com", "010-0000-0000").await,
            DuplicateCheckResult::none()
        );
    }

    #[tokio::test]
    async fn test_submit_posts_record() {
        let (url, server) = serve_once(200, r#"{"success":true}"#).await;
        let client = client_for(url);

        let outcome = client.submit(&submission()).await;

        assert_eq!(outcome, Ok(SubmitOutcome::Confirmed { updated: false }));
        let request = server.await.unwrap();
        assert!(request.starts_with("POST /exec "), "unexpected request: {request}");
        assert!(!request.to_lowercase().contains("content-type: application/json"));
        assert!(request.contains(r#""email":"hong@example.com""#));
        assert!(request.contains(r#""type":"interest""#));
        assert!(!request.contains("accountConfirmed"));
    }

    #[tokio::test]
    async fn test_submit_reports_rejection() {
        let (url, server) = serve_once(200, r#"{"success":false,"error":"x"}"#).await;
        let client = client_for(url);

        let err = client.submit(&submission()).await.unwrap_err();

        assert_eq!(err, SubmissionError::Rejected("x".to_string()));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_plain_text_is_optimistic() {
        let (url, server) = serve_once(200, "Saved").await;
        let client = client_for(url);

        assert_eq!(client.submit(&submission()).await, Ok(SubmitOutcome::Unverified));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_http_error() {
        let (url, server) = serve_once(503, "busy").await;
        let client = client_for(url);

        assert_eq!(
            client.submit(&submission()).await,
            Err(SubmissionError::Status {
                status: 503,
                body: "busy".to_string()
            })
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_disabled_client_skips_everything() {
        let client = SheetsClient::disabled();
        assert!(!client.is_configured());
        assert_eq!(
            client.check_duplicate("a@example.com", "010-0000-0000").await,
            DuplicateCheckResult::none()
        );
        assert_eq!(client.submit(&submission()).await, Ok(SubmitOutcome::Skipped));

        let from_blank = SheetsClient::new(EndpointConfig::default()).unwrap();
        assert!(!from_blank.is_configured());
    }
}

//! HTTP client for the EmailJS REST API
//!
//! EmailJS accepts a JSON POST naming the service, the template and the
//! account's public key, plus the template parameters that fill the email.

use super::{EmailRequest, MessageSender, SendError};
use async_trait::async_trait;
use reqwest::Client;

/// Default EmailJS send endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Client for the EmailJS send endpoint
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: Client,
    endpoint: String,
}

impl EmailJsClient {
    /// Create a client posting to `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl MessageSender for EmailJsClient {
    async fn send(&self, request: &EmailRequest) -> Result<(), SendError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting contact message");

        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // EmailJS explains refusals in a plain-text body
        let body = response.text().await.unwrap_or_default();
        Err(SendError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer a single request with `status` and `body`, handing back the raw request
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/api/v1.0/email/send", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                received.extend_from_slice(&chunk[..n]);
                if n == 0 || request_complete(&received) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&received).into_owned()
        });

        (endpoint, handle)
    }

    /// Client that talks to the loopback server directly, ignoring proxy settings
    fn local_client(endpoint: String) -> EmailJsClient {
        EmailJsClient {
            http: Client::builder().no_proxy().build().unwrap(),
            endpoint,
        }
    }

    fn request_complete(received: &[u8]) -> bool {
        let text = String::from_utf8_lossy(received);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        body.len() >= length
    }

    #[test]
    fn test_default_endpoint() {
        let client = EmailJsClient::default();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_custom_endpoint() {
        let client = EmailJsClient::new("http://127.0.0.1:9/send");
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/send");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) is not listening on loopback in test environments
        let client = EmailJsClient::new("http://127.0.0.1:9/send");
        let request = EmailRequest::sample();

        let err = client.send(&request).await.unwrap_err();
        assert!(matches!(err, SendError::Transport(_)));
    }

    #[tokio::test]
    async fn test_accepted_post_is_ok() {
        let (endpoint, server) = serve_once("200 OK", "OK").await;
        let client = local_client(endpoint);

        client.send(&EmailRequest::sample()).await.unwrap();

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /api/v1.0/email/send "));
        assert!(raw.contains("\"service_id\":\"service_test\""));
        assert!(raw.contains("\"user_id\":\"public_test\""));
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected_with_body() {
        let (endpoint, server) = serve_once("400 Bad Request", "The template ID is invalid").await;
        let client = local_client(endpoint);

        let err = client.send(&EmailRequest::sample()).await.unwrap_err();
        server.await.unwrap();

        match err {
            SendError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "The template ID is invalid");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }
}

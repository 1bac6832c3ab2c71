//! Page fetcher for the version source

#[cfg(test)]
use mockall::automock;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::version::error::FetchError;

/// Trait for fetching the body of the page a version is scraped from
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns its body as text
    ///
    /// # Returns
    /// * `Ok(String)` - The response body, decoded as UTF-8 with replacement
    /// * `Err(FetchError)` - On network failure, timeout or non-success status
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetcher backed by a `reqwest` client
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            FetchError::Network(err)
        }
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching source page: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Source returned status {}: {}", status, url);
            return Err(FetchError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(url, e))?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::user_agent;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_returns_body_and_sends_client_tag() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/vlc/")
            .match_header("user-agent", user_agent().as_str())
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<h1>VLC media player 3.0.21</h1>")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
        let body = fetcher
            .fetch(&format!("{}/vlc/", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body, "<h1>VLC media player 3.0.21</h1>");
    }

    #[tokio::test]
    async fn fetch_replaces_invalid_utf8() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/vlc/")
            .with_status(200)
            .with_body(b"VLC \xff 3.0.21".as_slice())
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
        let body = fetcher
            .fetch(&format!("{}/vlc/", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body, "VLC \u{fffd} 3.0.21");
    }

    #[tokio::test]
    async fn fetch_returns_http_status_error_for_404() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
        let result = fetcher.fetch(&format!("{}/missing", server.url())).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FetchError::HttpStatus { status, .. }) if status == reqwest::StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn fetch_returns_network_error_when_connection_refused() {
        let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
        let result = fetcher.fetch("http://127.0.0.1:9").await;

        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn fetch_returns_timeout_when_server_never_responds() {
        // Bound but never accepted: the handshake completes, no response follows.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());

        let config = FetchConfig {
            timeout: Duration::from_millis(200),
            ..FetchConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        let result = fetcher.fetch(&url).await;

        assert!(matches!(
            result,
            Err(FetchError::Timeout { timeout, .. }) if timeout == Duration::from_millis(200)
        ));
    }
}

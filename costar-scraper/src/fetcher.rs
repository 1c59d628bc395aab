use crate::error::{Result, ScrapeError};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Identify as a desktop browser; some page variants are only served to
/// recognized user agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP document fetcher shared by every crawl pipeline.
///
/// Cloning is cheap; the underlying client and its connection pool are
/// shared between clones.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs / 2))
            .pool_max_idle_per_host(50)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch a page body. Transport errors and non-success statuses come
    /// back as error values so callers can skip-and-log.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let parsed = Url::parse(url)
            .map_err(|e| ScrapeError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/name/nm0000001/fullcredits"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string("<html><body>filmography</body></html>"),
            )
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::with_timeout(2);
        let body = fetcher
            .fetch(&format!("{}/name/nm0000001/fullcredits", mock_server.uri()))
            .await
            .unwrap();

        assert!(body.contains("filmography"));
    }

    #[tokio::test]
    async fn test_fetch_sends_browser_user_agent() {
        let mock_server = MockServer::start().await;

        // Mock only matches when the browser UA header is present.
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("user-agent", BROWSER_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::with_timeout(2);
        let body = fetcher.fetch(&mock_server.uri()).await.unwrap();

        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_fetch_reports_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::with_timeout(2);
        let err = fetcher
            .fetch(&format!("{}/missing", mock_server.uri()))
            .await
            .unwrap_err();

        match err {
            ScrapeError::BadStatus { status, .. } => assert_eq!(status, 404),
            other => panic!("expected BadStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_follows_redirects() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/moved"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("location", "/destination"),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/destination"))
            .respond_with(ResponseTemplate::new(200).set_body_string("landed"))
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::with_timeout(2);
        let body = fetcher
            .fetch(&format!("{}/moved", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "landed");
    }
}

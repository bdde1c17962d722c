use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ScrapeConfig;
use super::error::ScrapeError;

/// Source of raw page bodies. Parsing stays with the extractors so a parsed
/// document never lives across an await.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(cfg: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .user_agent(cfg.user_agent.clone())
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        debug!(url, "fetch");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: url.to_string(), status });
        }
        response.text().await.map_err(|e| ScrapeError::from_reqwest(url, e))
    }
}

#[cfg(test)]
pub use fixture::StaticFetcher;


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_fetcher_serves_and_fails() {
        let fetcher = StaticFetcher::new()
            .page("https://w/wiki/Ares", "<html></html>")
            .fail("https://w/wiki/Zeus");

        assert_eq!(fetcher.fetch("https://w/wiki/Ares").await.unwrap(), "<html></html>");
        let err = fetcher.fetch("https://w/wiki/Zeus").await.unwrap_err();
        assert_eq!(err.category(), "network");
        let err = fetcher.fetch("https://w/wiki/Thor").await.unwrap_err();
        assert!(matches!(err, ScrapeError::Status { .. }));
        assert_eq!(fetcher.calls().len(), 3);
    }

    #[test]
    fn http_fetcher_builds_from_config() {
        let cfg = ScrapeConfig::default();
        assert!(HttpFetcher::new(&cfg).is_ok());
    }
}

use std::time::Duration;

use anyhow::{Context, Result};
use hexscan_core::PageFetcher;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::SourceError;

/// Page fetch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Request timeout (seconds)
    #[serde(default = "FetchConfig::default_timeout")]
    pub timeout: u64,

    /// User-Agent header
    #[serde(default = "FetchConfig::default_user_agent")]
    pub user_agent: String,

    /// Maximum response size (bytes)
    #[serde(default = "FetchConfig::default_max_size")]
    pub max_size: usize,
}

impl FetchConfig {
    const fn default_timeout() -> u64 {
        10
    }

    fn default_user_agent() -> String {
        "Mozilla/5.0 (compatible; hexscan/0.1)".to_string()
    }

    const fn default_max_size() -> usize {
        1_000_000 // 1MB
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
            max_size: Self::default_max_size(),
        }
    }
}

/// Blocking HTTP page fetcher. Supports http and https URLs.
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let parsed = url::Url::parse(url).map_err(SourceError::InvalidUrl)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SourceError::UnsupportedScheme(parsed.scheme().to_string()).into());
        }

        info!("Fetching page: {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.config.user_agent)
            .header("Accept", "text/html, text/plain")
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(SourceError::Http)?;

        let body = response.text().map_err(SourceError::Http)?;
        if body.len() > self.config.max_size {
            return Err(SourceError::TooLarge {
                got: body.len(),
                max: self.config.max_size,
            }
            .into());
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 10);
        assert_eq!(config.max_size, 1_000_000);
        assert!(config.user_agent.contains("hexscan"));
    }

    #[test]
    fn test_fetcher_new() {
        let fetcher = HttpFetcher::new(FetchConfig::default());
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_invalid_url_is_an_error() {
        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let err = fetcher.fetch("not a url").unwrap_err();
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_unsupported_scheme_is_an_error() {
        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let err = fetcher.fetch("ftp://example.com/colors").unwrap_err();
        assert!(err.to_string().contains("http and https"));
    }
}

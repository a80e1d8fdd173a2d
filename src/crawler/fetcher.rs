//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with timeouts and a user agent
//! - GET requests for listing pages
//! - Error classification into `FetchError`
//! - Sequential and batched-concurrent fetching of a page list

use crate::config::FetchConfig;
use crate::{FetchError, FetchResult};
use futures::future::join_all;
use reqwest::Client;
use std::time::Duration;

/// Raw body of a successfully fetched listing page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL that was requested
    pub url: String,

    /// Page body content
    pub body: String,
}

/// How a list of pages is fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// One request at a time
    Sequential,

    /// Consecutive chunks of at most `batch_size` requests; every request in
    /// a chunk runs concurrently and the whole chunk finishes before the next
    /// one starts
    Batched { batch_size: usize },
}

impl FetchMode {
    pub fn from_config(config: &FetchConfig) -> Self {
        if config.concurrent {
            Self::Batched {
                batch_size: config.batch_size.max(1),
            }
        } else {
            Self::Sequential
        }
    }
}

/// Outcome of fetching a list of pages
#[derive(Debug, Default)]
pub struct FetchReport {
    /// Successfully fetched pages, in input order
    pub pages: Vec<FetchedPage>,

    /// Failed fetches, in input order
    pub failures: Vec<FetchError>,
}

/// Builds an HTTP client with proper configuration
///
/// Every request made through the client is bounded by the configured
/// request timeout, so a stalled server cannot hold up a batch forever.
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches listing pages over a shared HTTP client
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a single URL
    ///
    /// # Errors
    ///
    /// | Condition | Error |
    /// |-----------|-------|
    /// | Request exceeded the timeout | `FetchError::Timeout` |
    /// | Connection failure | `FetchError::Network` |
    /// | Non-2xx response | `FetchError::Status` |
    /// | Anything else (body decode, ...) | `FetchError::Http` |
    pub async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        tracing::info!("Current URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| classify_error(url, e))?;

        Ok(FetchedPage {
            url: url.to_string(),
            body,
        })
    }

    /// Fetches URLs one at a time
    pub async fn fetch_sequential(&self, urls: &[String]) -> Vec<FetchResult<FetchedPage>> {
        let mut results = Vec::with_capacity(urls.len());
        for url in urls {
            results.push(self.fetch(url).await);
        }
        results
    }

    /// Fetches URLs in consecutive concurrent chunks of at most `batch_size`
    ///
    /// Each request owns its own result, so one failure never affects the
    /// rest of its chunk. Results keep input order.
    pub async fn fetch_batched(
        &self,
        urls: &[String],
        batch_size: usize,
    ) -> Vec<FetchResult<FetchedPage>> {
        let mut results = Vec::with_capacity(urls.len());
        for (index, chunk) in urls.chunks(batch_size.max(1)).enumerate() {
            tracing::debug!("Fetching batch {} ({} URLs)", index + 1, chunk.len());
            let batch = join_all(chunk.iter().map(|url| self.fetch(url))).await;
            results.extend(batch);
        }
        results
    }

    /// Fetches every URL in the given mode, logging and skipping failures
    pub async fn fetch_pages(&self, urls: &[String], mode: FetchMode) -> FetchReport {
        let results = match mode {
            FetchMode::Sequential => self.fetch_sequential(urls).await,
            FetchMode::Batched { batch_size } => self.fetch_batched(urls, batch_size).await,
        };

        let mut report = FetchReport::default();
        for result in results {
            match result {
                Ok(page) => report.pages.push(page),
                Err(e) => {
                    tracing::error!("Failed in the URL: {}: {:?}", e.url(), e);
                    report.failures.push(e);
                }
            }
        }
        report
    }
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        FetchError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}

// src/scrape/fetch.rs
//! Candidate-URL page fetching. A timeout or non-2xx status falls through to
//! the next candidate; only when every candidate has failed does the fetcher
//! report an error, tagged as network vs. unexpected.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network failure fetching {url}: {message}")]
    Network { url: String, message: String },
    #[error("unexpected fetch failure for {url}: {message}")]
    Unexpected { url: String, message: String },
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Try each candidate URL in order; the first success-status body wins
    /// and later candidates are not attempted.
    async fn fetch(&self, candidates: &[String]) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .connect_timeout(Duration::from_secs(4))
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

fn classify(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() || err.is_connect() {
        FetchError::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else {
        FetchError::Unexpected {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, candidates: &[String]) -> Result<String, FetchError> {
        let mut last: Option<FetchError> = None;
        for url in candidates {
            match self.client.get(url).send().await {
                Ok(resp) if resp.status().is_success() => match resp.text().await {
                    Ok(body) => return Ok(body),
                    Err(e) => {
                        warn!(url = %url, error = %e, "body read failed, trying next candidate");
                        last = Some(classify(url, e));
                    }
                },
                Ok(resp) => {
                    debug!(url = %url, status = %resp.status(), "candidate returned non-success");
                    last = Some(FetchError::Unexpected {
                        url: url.clone(),
                        message: format!("http status {}", resp.status()),
                    });
                }
                Err(e) => {
                    debug!(url = %url, error = %e, "candidate request failed");
                    last = Some(classify(url, e));
                }
            }
        }
        Err(last.unwrap_or_else(|| FetchError::Unexpected {
            url: String::new(),
            message: "no candidate urls".to_string(),
        }))
    }
}

//! Feed retrieval over HTTP.
//!
//! [`FetchFeed`] is the seam the aggregator fans out over; tests substitute a
//! stub, production uses [`HttpFetcher`]. Errors are returned to the caller
//! here — swallowing a bad source is the aggregator's job, and it does so
//! visibly at the batch join.

use crate::parser;
use crate::types::{AggregatorError, FeedSource, FetchConfig, RawItem, Result};
use async_trait::async_trait;
use backoff::backoff::Backoff;
use backoff::exponential::ExponentialBackoff;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait FetchFeed: Send + Sync {
    /// Retrieve and parse `source.url` into its items, in document order.
    async fn fetch_items(&self, source: &FeedSource) -> Result<Vec<RawItem>>;
}

pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client, config })
    }

    async fn fetch_once(&self, source: &FeedSource) -> Result<Vec<RawItem>> {
        let response = self.client.get(&source.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AggregatorError::Status {
                status: status.as_u16(),
                url: source.url.clone(),
            });
        }

        let body = response.bytes().await?;
        debug!(source = %source.name, bytes = body.len(), "fetched feed");
        parser::parse_items(&body)
    }
}

#[async_trait]
impl FetchFeed for HttpFetcher {
    async fn fetch_items(&self, source: &FeedSource) -> Result<Vec<RawItem>> {
        let mut backoff: ExponentialBackoff<backoff::SystemClock> = ExponentialBackoff {
            current_interval: Duration::from_secs(self.config.retry_delay_seconds),
            initial_interval: Duration::from_secs(self.config.retry_delay_seconds),
            max_interval: Duration::from_secs(self.config.retry_delay_seconds * 8),
            multiplier: 2.0,
            max_elapsed_time: None,
            ..Default::default()
        };

        let mut last_error = None;
        for attempt in 0..=self.config.max_retries {
            match self.fetch_once(source).await {
                Ok(items) => return Ok(items),
                Err(e) => {
                    if attempt < self.config.max_retries {
                        if let Some(delay) = backoff.next_backoff() {
                            warn!(
                                source = %source.name,
                                attempt = attempt + 1,
                                error = %e,
                                "fetch attempt failed, retrying in {:?}", delay
                            );
                            tokio::time::sleep(delay).await;
                        }
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| AggregatorError::General("fetch produced no attempts".to_string())))
    }
}

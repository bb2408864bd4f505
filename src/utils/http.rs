use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, warn};
use url::Url;

use crate::config::Config;
use crate::error::ScrapeError;
use crate::scrapers::PageFetcher;

pub fn create_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .pool_max_idle_per_host(6)
        .build()?;

    Ok(client)
}

/// GET `url`, making up to `max_attempts` attempts with exponential backoff between them.
pub async fn fetch_with_retry(
    client: &Client,
    url: &str,
    max_attempts: u32,
) -> Result<Response, ScrapeError> {
    let max_attempts = max_attempts.max(1);
    let mut attempts = 0;
    let mut last_error = None;

    while attempts < max_attempts {
        match client.get(url).send().await {
            Ok(response) => {
                if response.status().is_success() {
                    return Ok(response);
                }
                let status = response.status();
                warn!("HTTP error {}: {}", status, url);
                last_error = Some(ScrapeError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }
            Err(e) => {
                error!("Request failed for {}: {}", url, e);
                last_error = Some(ScrapeError::Request {
                    url: url.to_string(),
                    source: e,
                });
            }
        }

        attempts += 1;
        if attempts < max_attempts {
            let delay = Duration::from_secs(2u64.pow(attempts));
            warn!("Retrying in {:?}... (attempt {}/{})", delay, attempts + 1, max_attempts);
            sleep(delay).await;
        }
    }

    let last_error = last_error.unwrap_or_else(|| ScrapeError::UnexpectedStatus {
        status: 0,
        url: url.to_string(),
    });

    if max_attempts == 1 {
        Err(last_error)
    } else {
        Err(ScrapeError::AttemptsExhausted {
            url: url.to_string(),
            attempts: max_attempts,
            last_error: Box::new(last_error),
        })
    }
}

/// Fetches listing pages as `<base-url>?page=<n>`.
pub struct HttpPageFetcher {
    client: Client,
    base_url: Url,
    max_attempts: u32,
}

impl HttpPageFetcher {
    pub fn new(client: Client, base_url: &str, max_attempts: u32) -> Result<Self, ScrapeError> {
        let base_url = Url::parse(base_url).map_err(|source| ScrapeError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            client,
            base_url,
            max_attempts,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("page", &page.to_string());
        url
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, page: u32) -> Result<String, ScrapeError> {
        let url = self.page_url(page);
        debug!("Fetching page {} from {}", page, url);

        let response = fetch_with_retry(&self.client, url.as_str(), self.max_attempts).await?;
        response.text().await.map_err(|source| ScrapeError::Request {
            url: url.to_string(),
            source,
        })
    }
}

// file: src/scrape/loader.rs
// description: single-attempt bounded HTTP fetch of a patent page
// reference: https://docs.rs/reqwest

use crate::config::ScrapeConfig;
use crate::error::{PipelineError, Result};
use crate::scrape::PageDocument;
use crate::utils::PatentNumber;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

pub struct DocumentLoader {
    client: Client,
    base_url: String,
}

impl DocumentLoader {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| PipelineError::Config(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches and parses the page for one patent. One attempt, no retry;
    /// a timed-out or failed request surfaces as a fetch error and the
    /// caller decides whether to try again.
    pub async fn load(&self, patent: &PatentNumber) -> Result<PageDocument> {
        let url = format!("{}{}", self.base_url, patent.page_path());
        self.load_url(&url).await
    }

    /// Fetches and parses an explicit URL.
    pub async fn load_url(&self, url: &str) -> Result<PageDocument> {
        info!("Fetching patent page: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| PipelineError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| PipelineError::Fetch {
                url: url.to_string(),
                source,
            })?;

        debug!("Fetched {} bytes from {}", body.len(), url);

        PageDocument::parse(&body)
    }
}

//! Revenue Feed Module
//! Blocking HTTP client for the monthly revenue status feed. One GET, no
//! retries; callers log failures and move on.

use crate::data::reports::RevenueStatus;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Feed returned HTTP {status}")]
    Status { status: u16 },
}

/// Client for the unauthenticated `/api/monthly-revenue-status` endpoint.
pub struct RevenueFeed {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RevenueFeed {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(base_url: impl Into<String>) -> Result<Self, FeedError> {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and decode the feed payload.
    pub fn monthly_revenue_status(&self) -> Result<RevenueStatus, FeedError> {
        let url = format!("{}/api/monthly-revenue-status", self.base_url);
        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.json()?)
    }
}

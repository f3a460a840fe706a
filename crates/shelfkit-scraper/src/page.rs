//! HTTP client for arbitrary product pages.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// Per-request deadline for product pages.
pub const PAGE_TIMEOUT_SECS: u64 = 30;

/// Fetches product pages with a browser-like `User-Agent`.
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Creates a `PageClient` with a [`PAGE_TIMEOUT_SECS`] deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PAGE_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the body of `url` as text.
    ///
    /// Non-2xx responses are not treated as failures: error pages are still
    /// returned so the caller can look for structured data in them.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] on TLS, connection, or timeout failure.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "non-success page status");
        }

        Ok(response.text().await?)
    }
}

//! Client for the DataForSEO organic search endpoint.
//!
//! One POST per keyword. The raw response is returned untouched so callers
//! can cache it to disk and re-read result URLs later with
//! [`extract_result_urls`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::{json, Value};

use crate::error::ScraperError;

/// Search location (United States).
const LOCATION_CODE: u32 = 2840;

/// Status code the API reports for a successful request.
const API_STATUS_OK: i64 = 20000;

/// Client for the search API.
///
/// Use [`SerpClient::new`] for production or [`SerpClient::with_base_url`]
/// to point at a mock server in tests.
pub struct SerpClient {
    client: Client,
    auth: String,
    endpoint: Url,
}

impl SerpClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// `auth` is sent verbatim as the `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(auth: &str, timeout_secs: u64) -> Result<Self, ScraperError> {
        Self::with_base_url(auth, timeout_secs, shelfkit_core::DEFAULT_SERP_BASE_URL)
    }

    /// Creates a client posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`ScraperError::InvalidUrl`] if `endpoint` does not
    /// parse.
    pub fn with_base_url(
        auth: &str,
        timeout_secs: u64,
        endpoint: &str,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| ScraperError::InvalidUrl {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            auth: auth.to_owned(),
            endpoint,
        })
    }

    /// Runs a live organic search for `keyword` and returns the raw response.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network failure.
    /// - [`ScraperError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ScraperError::Deserialize`] if the body is not JSON.
    /// - [`ScraperError::Api`] if the envelope reports a non-OK `status_code`.
    pub async fn search(&self, keyword: &str) -> Result<Value, ScraperError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::AUTHORIZATION, &self.auth)
            .json(&Self::request_body(keyword))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|e| ScraperError::Deserialize {
                context: format!("search response for {keyword}"),
                source: e,
            })?;

        Self::check_api_error(&value)?;
        Ok(value)
    }

    fn request_body(keyword: &str) -> Value {
        json!([{
            "keyword": keyword,
            "location_code": LOCATION_CODE,
            "language_code": "en",
            "device": "desktop",
            "os": "windows",
        }])
    }

    /// Envelopes without a `status_code` are accepted as-is.
    fn check_api_error(value: &Value) -> Result<(), ScraperError> {
        let Some(code) = value.get("status_code").and_then(Value::as_i64) else {
            return Ok(());
        };
        if code == API_STATUS_OK {
            return Ok(());
        }
        let message = value
            .get("status_message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_owned();
        Err(ScraperError::Api { code, message })
    }
}

/// Reads up to `max` result URLs from a search response.
///
/// URLs come from `tasks[0].result[0].items[*].url`; items without a `url`
/// (ads, answer boxes, related searches) are skipped. A response without that
/// structure yields no URLs.
#[must_use]
pub fn extract_result_urls(response: &Value, max: usize) -> Vec<String> {
    response
        .pointer("/tasks/0/result/0/items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("url").and_then(Value::as_str))
                .take(max)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

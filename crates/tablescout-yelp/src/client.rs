//! HTTP client for the Yelp Fusion REST API.
//!
//! Wraps `reqwest` with bearer-credential management, independent per-endpoint
//! timeouts, and typed response deserialization. Non-2xx statuses surface as
//! [`YelpError::Status`] with the code preserved so callers can distinguish
//! an authorization failure from a transient one. No retries here; if a
//! caller wants retry/backoff it belongs in the transport layer above.

use std::time::Duration;

use reqwest::{Client, Url};
use tablescout_core::AppConfig;

use crate::error::YelpError;
use crate::types::{Business, Review, ReviewsResponse, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.yelp.com/v3/";

/// Client for the Yelp Fusion REST API.
///
/// Manages the HTTP client, API key, base URL, and the two endpoint
/// timeouts. Use [`YelpClient::from_config`] for production or
/// [`YelpClient::with_base_url`] to point at a mock server in tests.
pub struct YelpClient {
    client: Client,
    api_key: String,
    base_url: Url,
    search_timeout: Duration,
    reviews_timeout: Duration,
}

impl YelpClient {
    /// Creates a client from application config, pointed at the production
    /// API.
    ///
    /// # Errors
    ///
    /// Returns [`YelpError::MissingCredential`] if the config carries no API
    /// key — checked here, before any network call can happen — or
    /// [`YelpError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, YelpError> {
        let api_key = config
            .yelp_api_key
            .as_deref()
            .ok_or(YelpError::MissingCredential)?;
        Self::with_base_url(
            api_key,
            config.search_timeout_secs,
            config.reviews_timeout_secs,
            &config.user_agent,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YelpError::MissingCredential`] if `api_key` is blank,
    /// [`YelpError::InvalidBaseUrl`] if `base_url` does not parse, or
    /// [`YelpError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn with_base_url(
        api_key: &str,
        search_timeout_secs: u64,
        reviews_timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, YelpError> {
        if api_key.trim().is_empty() {
            return Err(YelpError::MissingCredential);
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends path segments instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| YelpError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base,
            search_timeout: Duration::from_secs(search_timeout_secs),
            reviews_timeout: Duration::from_secs(reviews_timeout_secs),
        })
    }

    /// Issues one business search with the given pre-mapped parameters.
    ///
    /// A payload with no `businesses` field yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`YelpError::Http`] on network failure or timeout.
    /// - [`YelpError::Status`] on a non-2xx response.
    /// - [`YelpError::Deserialize`] if the body does not match the expected
    ///   shape.
    pub async fn search(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<Vec<Business>, YelpError> {
        let mut url = self.endpoint("businesses/search")?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }

        let body = self.request_json(url, self.search_timeout).await?;
        let response: SearchResponse =
            serde_json::from_value(body).map_err(|e| YelpError::Deserialize {
                context: "businesses/search".to_string(),
                source: e,
            })?;

        tracing::debug!(
            returned = response.businesses.len(),
            total = ?response.total,
            "search response parsed"
        );
        Ok(response.businesses)
    }

    /// Fetches the review excerpts for one business.
    ///
    /// # Errors
    ///
    /// - [`YelpError::Http`] on network failure or timeout.
    /// - [`YelpError::Status`] on a non-2xx response.
    /// - [`YelpError::Deserialize`] if the body does not match the expected
    ///   shape.
    pub async fn reviews(&self, business_id: &str) -> Result<Vec<Review>, YelpError> {
        let url = self.endpoint(&format!("businesses/{business_id}/reviews"))?;
        let body = self.request_json(url, self.reviews_timeout).await?;
        let response: ReviewsResponse =
            serde_json::from_value(body).map_err(|e| YelpError::Deserialize {
                context: format!("businesses/{business_id}/reviews"),
                source: e,
            })?;
        Ok(response.reviews)
    }

    /// Joins a path onto the stored base URL.
    fn endpoint(&self, path: &str) -> Result<Url, YelpError> {
        self.base_url
            .join(path)
            .map_err(|e| YelpError::InvalidBaseUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })
    }

    /// Sends a GET with the bearer credential and the given timeout, asserts
    /// a 2xx status, and parses the body as JSON.
    async fn request_json(
        &self,
        url: Url,
        timeout: Duration,
    ) -> Result<serde_json::Value, YelpError> {
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.api_key)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(YelpError::Status {
                code: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| YelpError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

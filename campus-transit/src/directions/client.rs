//! Google Directions HTTP client.
//!
//! One request per (origin, destination, mode). Concurrency is bounded by a
//! semaphore so a burst of searches does not trip the provider's quota.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use super::error::DirectionsError;
use super::types::{DirectionsResponse, ExternalMode};

/// Default endpoint for the JSON Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Response bodies quoted in parse errors are cut to this many characters.
const ERROR_BODY_CHARS: usize = 500;

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Endpoint URL (defaults to the production API)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl DirectionsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        if config.api_key.is_empty() {
            return Err(DirectionsError::NotConfigured(
                "directions API key is empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Request itineraries between two free-text locations in one mode.
    ///
    /// The locations are passed through untouched; the provider geocodes
    /// them. A response whose `status` is not `OK` is an error.
    pub async fn get_directions(
        &self,
        origin: &str,
        destination: &str,
        mode: ExternalMode,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DirectionsError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        debug!(
            origin,
            destination, mode = mode.as_str(), "requesting directions"
        );

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", mode.as_str()),
                ("alternatives", "true"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Parse a response body, rejecting non-OK statuses.
pub(crate) fn parse_response(body: &str) -> Result<DirectionsResponse, DirectionsError> {
    let parsed: DirectionsResponse =
        serde_json::from_str(body).map_err(|e| DirectionsError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(ERROR_BODY_CHARS).collect()),
        })?;

    check_status(parsed)
}

/// Turn a non-OK provider status into an error.
pub(crate) fn check_status(
    response: DirectionsResponse,
) -> Result<DirectionsResponse, DirectionsError> {
    match response.status.as_str() {
        "OK" => Ok(response),
        "OVER_QUERY_LIMIT" => Err(DirectionsError::RateLimited),
        _ => Err(DirectionsError::Status {
            status: response.status,
            message: response.error_message,
        }),
    }
}

//! Caching layer for directions responses.
//!
//! Provider requests are slow and metered, and the same off-campus query
//! tends to be repeated by many users within minutes. Successful responses
//! are cached per (origin, destination, mode); failures are never cached so
//! a transient error does not stick.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::directions::{DirectionsError, DirectionsProvider, DirectionsResponse, ExternalMode};

/// Cache key: (origin text, destination text, mode).
type DirectionsKey = (String, String, ExternalMode);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

impl CacheConfig {
    /// Set the TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the maximum number of entries.
    pub fn with_max_capacity(mut self, n: u64) -> Self {
        self.max_capacity = n;
        self
    }
}

/// Directions provider with caching.
///
/// Wraps any [`DirectionsProvider`] and is itself one, so it can be dropped
/// in front of the live client or the mock without changing callers.
pub struct CachedDirections<P> {
    provider: P,
    responses: MokaCache<DirectionsKey, DirectionsResponse>,
}

impl<P: DirectionsProvider> CachedDirections<P> {
    /// Create a new cached provider.
    pub fn new(provider: P, config: &CacheConfig) -> Self {
        let responses = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            provider,
            responses,
        }
    }

    /// Access the underlying provider for requests that bypass the cache.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.responses.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.responses.invalidate_all();
    }
}

impl<P: DirectionsProvider> DirectionsProvider for CachedDirections<P> {
    async fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: ExternalMode,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let key = (origin.to_string(), destination.to_string(), mode);

        if let Some(cached) = self.responses.get(&key).await {
            trace!(
                origin,
                destination,
                mode = mode.as_str(),
                "directions cache hit"
            );
            return Ok(cached);
        }

        let response = self.provider.directions(origin, destination, mode).await?;
        self.responses.insert(key, response.clone()).await;

        Ok(response)
    }
}

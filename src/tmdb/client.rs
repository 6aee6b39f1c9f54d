//! TMDB HTTP client.
//!
//! Issues bearer-authenticated GET requests against the TMDB v3 REST API
//! with a 30-second request timeout and token-bucket rate limiting at
//! 4 requests / second via [`governor`]. Failures are not retried; the
//! catalog layer decides what a failure means per call site.

use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use governor::{Quota, RateLimiter};
use tracing::debug;

use super::types::{ExternalIds, ListingResponse, MediaKind, RawItem};
use super::MetadataSource;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// TMDB v3 API client.
///
/// The base URL is injectable so integration tests can point the client at
/// a mock server.
pub struct TmdbClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
    rate_limiter: governor::RateLimiter<
        governor::state::NotKeyed,
        governor::state::InMemoryState,
        governor::clock::DefaultClock,
    >,
}

impl TmdbClient {
    /// Create a client against the production TMDB API.
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, TMDB_BASE_URL.to_string())
    }

    /// Create a client against an arbitrary base URL (test seam).
    pub fn with_base_url(token: String, base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build reqwest client");

        let quota = Quota::per_second(NonZeroU32::new(4).unwrap());
        let rate_limiter = RateLimiter::direct(quota);

        Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limiter,
        }
    }

    /// Execute a rate-limited, authenticated GET and map non-2xx to errors.
    async fn get(&self, url: &str) -> anyhow::Result<reqwest::Response> {
        self.rate_limiter.until_ready().await;

        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("TMDB request failed: {url}"))?;

        resp.error_for_status()
            .with_context(|| format!("TMDB request returned error: {url}"))
    }
}

#[async_trait]
impl MetadataSource for TmdbClient {
    async fn listing(&self, path: &str) -> anyhow::Result<Vec<RawItem>> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "TMDB listing");

        let body: ListingResponse = self
            .get(&url)
            .await?
            .json()
            .await
            .context("failed to parse TMDB listing response")?;

        Ok(body.results)
    }

    async fn external_ids(&self, kind: MediaKind, id: u64) -> anyhow::Result<ExternalIds> {
        let url = format!("{}/{kind}/{id}/external_ids", self.base_url);
        debug!(url = %url, "TMDB external ids");

        self.get(&url)
            .await?
            .json()
            .await
            .context("failed to parse TMDB external ids response")
    }
}

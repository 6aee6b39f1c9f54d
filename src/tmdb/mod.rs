//! TMDB upstream client.
//!
//! Defines the [`MetadataSource`] trait that the catalog layer consumes and
//! the [`TmdbClient`] implementation backed by the TMDB v3 REST API.

pub mod client;
pub mod types;

pub use client::{TmdbClient, POSTER_BASE_URL, TMDB_BASE_URL};
pub use types::{ExternalIds, MediaKind, RawItem};

use async_trait::async_trait;

/// Async source of listing pages and external identifiers.
///
/// [`TmdbClient`] is the production implementation; tests substitute stub
/// sources so the catalog pipeline can run without network access.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetch a listing page for the given upstream query path
    /// (e.g. `"/trending/movie/day?language=en-US"`).
    async fn listing(&self, path: &str) -> anyhow::Result<Vec<RawItem>>;

    /// Fetch the external identifiers for a single title.
    async fn external_ids(&self, kind: MediaKind, id: u64) -> anyhow::Result<ExternalIds>;
}

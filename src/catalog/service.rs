//! Catalog dispatch and whole-response caching.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use super::enrich::Enricher;
use super::format::ListingItem;
use super::routes;
use crate::cache::TtlCache;
use crate::tmdb::MetadataSource;

/// Default cache TTL: six hours, shared by both cache layers.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 21_600;

/// Errors surfaced by catalog dispatch.
///
/// Per-item identifier failures are not represented here; those collapse
/// to a silent drop inside the enrichment pipeline.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The `(category, type)` pair is not in the route table.
    #[error("invalid category or type")]
    InvalidRoute,

    /// The upstream listing fetch failed, whatever the cause.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

/// Drives a listing request end to end.
///
/// Owns the response cache; the identifier cache lives inside the
/// [`Enricher`]. Both use the same TTL. There is no single-flight:
/// concurrent misses on the same key may duplicate upstream work and both
/// write the cache, which is harmless because they compute the same value.
pub struct CatalogService {
    source: Arc<dyn MetadataSource>,
    enricher: Enricher,
    responses: TtlCache<(String, String), Arc<Vec<ListingItem>>>,
}

impl CatalogService {
    /// Create a service over the given upstream source with the default TTL.
    pub fn new(source: Arc<dyn MetadataSource>) -> Self {
        Self::with_ttl(source, Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }

    /// Create a service with an explicit TTL for both cache layers.
    pub fn with_ttl(source: Arc<dyn MetadataSource>, ttl: Duration) -> Self {
        Self {
            enricher: Enricher::new(Arc::clone(&source), ttl),
            source,
            responses: TtlCache::new(ttl),
        }
    }

    /// Serve the formatted listing for a `(category, type)` pair.
    ///
    /// Validate, check the response cache, fetch upstream, enrich, store,
    /// return. A cache hit bypasses the upstream fetch and the enrichment
    /// pipeline entirely; a partial result is never cached. A single
    /// upstream failure fails the whole request with no retry.
    pub async fn listing(
        &self,
        category: &str,
        kind: &str,
    ) -> Result<Arc<Vec<ListingItem>>, CatalogError> {
        let path = routes::upstream_path(category, kind).ok_or(CatalogError::InvalidRoute)?;

        let key = (category.to_string(), kind.to_string());
        if let Some(cached) = self.responses.get(&key) {
            debug!(category, kind, "response cache hit");
            return Ok(cached);
        }

        let raw = self.source.listing(path).await?;
        debug!(category, kind, items = raw.len(), "fetched upstream listing");

        let formatted = Arc::new(self.enricher.format_items(raw).await);
        self.responses.insert(key, Arc::clone(&formatted));

        Ok(formatted)
    }

    /// Drop expired entries from both cache layers.
    pub fn purge_expired(&self) {
        self.responses.purge_expired();
        self.enricher.purge_expired();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb::{ExternalIds, MediaKind, RawItem};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub source returning a fixed page; every item resolves to an IMDb
    /// ID derived from its numeric ID, except ID 0 which never resolves.
    struct StubSource {
        page: Vec<RawItem>,
        listing_calls: AtomicUsize,
        id_calls: AtomicUsize,
        fail_listing: bool,
    }

    impl StubSource {
        fn with_page(page: Vec<RawItem>) -> Self {
            Self {
                page,
                listing_calls: AtomicUsize::new(0),
                id_calls: AtomicUsize::new(0),
                fail_listing: false,
            }
        }

        fn failing() -> Self {
            Self {
                page: Vec::new(),
                listing_calls: AtomicUsize::new(0),
                id_calls: AtomicUsize::new(0),
                fail_listing: true,
            }
        }
    }

    #[async_trait]
    impl MetadataSource for StubSource {
        async fn listing(&self, _path: &str) -> anyhow::Result<Vec<RawItem>> {
            self.listing_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_listing {
                anyhow::bail!("connection refused");
            }
            Ok(self.page.clone())
        }

        async fn external_ids(&self, _kind: MediaKind, id: u64) -> anyhow::Result<ExternalIds> {
            self.id_calls.fetch_add(1, Ordering::SeqCst);
            Ok(ExternalIds {
                imdb_id: (id != 0).then(|| format!("tt{id:07}")),
            })
        }
    }

    fn raw_item(id: u64) -> RawItem {
        RawItem {
            id,
            title: Some(format!("Title {id}")),
            name: None,
            media_type: Some("movie".to_string()),
            first_air_date: None,
            vote_average: 7.0,
            poster_path: Some("/p.jpg".to_string()),
            genre_ids: vec![16, 10402],
        }
    }

    #[tokio::test]
    async fn invalid_route_fails_before_any_fetch() {
        let source = Arc::new(StubSource::with_page(vec![raw_item(1)]));
        let service = CatalogService::new(Arc::clone(&source) as Arc<dyn MetadataSource>);

        let err = service.listing("popular", "all").await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRoute));
        assert_eq!(source.listing_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn all_table_routes_dispatch_successfully() {
        let source = Arc::new(StubSource::with_page(vec![raw_item(1)]));
        let service = CatalogService::new(Arc::clone(&source) as Arc<dyn MetadataSource>);

        for (category, kind) in routes::VALID_ROUTES.iter().copied() {
            let result = service.listing(category, kind).await;
            assert!(result.is_ok(), "{category}/{kind} failed");
        }
    }

    #[tokio::test]
    async fn second_dispatch_is_served_from_the_response_cache() {
        let source = Arc::new(StubSource::with_page(vec![raw_item(1), raw_item(2)]));
        let service = CatalogService::new(Arc::clone(&source) as Arc<dyn MetadataSource>);

        let first = service.listing("trending", "movie").await.unwrap();
        let second = service.listing("trending", "movie").await.unwrap();

        assert_eq!(*first, *second);
        assert_eq!(source.listing_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.id_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn distinct_route_keys_do_not_share_cache_entries() {
        let source = Arc::new(StubSource::with_page(vec![raw_item(1)]));
        let service = CatalogService::new(Arc::clone(&source) as Arc<dyn MetadataSource>);

        service.listing("trending", "movie").await.unwrap();
        service.listing("popular", "movie").await.unwrap();

        assert_eq!(source.listing_calls.load(Ordering::SeqCst), 2);
        // Identifier lookups are shared across routes through the ID cache.
        assert_eq!(source.id_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn upstream_failure_is_not_cached() {
        let source = Arc::new(StubSource::failing());
        let service = CatalogService::new(Arc::clone(&source) as Arc<dyn MetadataSource>);

        let err = service.listing("trending", "movie").await.unwrap_err();
        assert!(matches!(err, CatalogError::Upstream(_)));

        // A later request hits upstream again rather than a cached failure.
        let _ = service.listing("trending", "movie").await.unwrap_err();
        assert_eq!(source.listing_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn unresolvable_items_are_absent_from_the_listing() {
        let source = Arc::new(StubSource::with_page(vec![
            raw_item(1),
            raw_item(0),
            raw_item(3),
        ]));
        let service = CatalogService::new(Arc::clone(&source) as Arc<dyn MetadataSource>);

        let listing = service.listing("trending", "movie").await.unwrap();
        let ids: Vec<&str> = listing.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["tt0000001", "tt0000003"]);
    }

    #[tokio::test]
    async fn formatted_items_carry_the_full_shape() {
        let source = Arc::new(StubSource::with_page(vec![raw_item(1)]));
        let service = CatalogService::new(Arc::clone(&source) as Arc<dyn MetadataSource>);

        let listing = service.listing("trending", "movie").await.unwrap();
        let item = &listing[0];
        assert_eq!(item.title, "Title 1");
        assert_eq!(item.rating, 7.0);
        assert_eq!(
            item.poster.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/p.jpg")
        );
        assert_eq!(item.genres, vec!["animation", "music", "musical"]);
    }
}

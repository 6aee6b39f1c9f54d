//! Per-item IMDb ID enrichment.
//!
//! [`Enricher`] owns the identifier cache and walks a raw listing page
//! strictly sequentially: item N's lookup is issued only after item N-1
//! completes. A page of K uncached items therefore costs roughly K
//! upstream round-trips, which is why the identifier cache is the single
//! most important performance lever of the proxy.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::format::{self, ListingItem};
use crate::cache::TtlCache;
use crate::tmdb::{MediaKind, MetadataSource, RawItem};

/// Resolves and caches IMDb IDs, and formats raw listing pages.
pub struct Enricher {
    source: Arc<dyn MetadataSource>,
    ids: TtlCache<(MediaKind, u64), Option<String>>,
}

impl Enricher {
    /// Create an enricher whose identifier cache uses the given TTL.
    pub fn new(source: Arc<dyn MetadataSource>, ttl: Duration) -> Self {
        Self {
            source,
            ids: TtlCache::new(ttl),
        }
    }

    /// Look up the IMDb ID for a title, consulting the cache first.
    ///
    /// Every failure mode (network error, non-2xx, malformed body, no ID
    /// in the response) collapses to `None`, and the result is cached
    /// either way so a failing lookup is not repeated within the TTL.
    pub async fn external_id(&self, kind: MediaKind, id: u64) -> Option<String> {
        let key = (kind, id);
        if let Some(cached) = self.ids.get(&key) {
            return cached;
        }

        let resolved = match self.source.external_ids(kind, id).await {
            Ok(ext) => ext.imdb_id.filter(|imdb| !imdb.is_empty()),
            Err(e) => {
                debug!(kind = %kind, id, error = %e, "external ID lookup failed");
                None
            }
        };

        self.ids.insert(key, resolved.clone());
        resolved
    }

    /// Format a raw listing page, dropping items with no resolvable IMDb ID.
    ///
    /// Output preserves input order minus the dropped items.
    pub async fn format_items(&self, raw: Vec<RawItem>) -> Vec<ListingItem> {
        let mut formatted = Vec::with_capacity(raw.len());

        for item in raw {
            let kind = format::media_kind(&item);
            match self.external_id(kind, item.id).await {
                Some(imdb_id) => formatted.push(format::to_listing_item(item, kind, imdb_id)),
                None => debug!(kind = %kind, id = item.id, "dropping item without IMDb ID"),
            }
        }

        formatted
    }

    /// Drop expired identifier entries.
    pub fn purge_expired(&self) {
        self.ids.purge_expired();
    }

    #[cfg(test)]
    pub(crate) fn cached_ids(&self) -> usize {
        self.ids.len()
    }
}

//! In-memory TTL cache.
//!
//! Both cache layers of the proxy (per-item IMDb ID lookups and whole
//! per-route responses) are instances of [`TtlCache`] with the same TTL
//! policy. Entries carry an absolute expiry stamped at insertion time and
//! are dropped lazily on access; [`purge_expired`](TtlCache::purge_expired)
//! sweeps the rest.

use dashmap::DashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Thread-safe key-value store with a fixed per-cache TTL.
pub struct TtlCache<K, V> {
    entries: DashMap<K, CacheEntry<V>>,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Create a cache whose entries expire `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Get a value if present and not expired.
    ///
    /// An expired entry is removed and treated as a miss.
    pub fn get(&self, key: &K) -> Option<V> {
        let hit = match self.entries.get(key) {
            Some(entry) if Instant::now() < entry.expires_at => Some(entry.value.clone()),
            Some(_) => None,
            None => return None,
        };
        if hit.is_none() {
            self.entries.remove(key);
        }
        hit
    }

    /// Insert a value, replacing any previous entry and restarting its TTL.
    pub fn insert(&self, key: K, value: V) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Number of entries, including any not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Remove expired entries.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| now < entry.expires_at);
    }
}

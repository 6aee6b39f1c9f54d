use serde::{Deserialize, Serialize};

use crate::catalog::service::DEFAULT_CACHE_TTL_SECS;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub tmdb: TmdbConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TmdbConfig {
    /// TMDB v4 read access token, sent as `Authorization: Bearer`.
    /// The `TMDB_TOKEN` environment variable overrides this value.
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// TTL in seconds for both the response and identifier caches
    /// (default: 6 hours).
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

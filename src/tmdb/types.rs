//! Wire types for the TMDB v3 API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a title is a movie or a TV show.
///
/// Serializes as the lowercase strings TMDB uses in paths and in the
/// `media_type` field of trending results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// Path segment used in TMDB URLs (`/movie/...`, `/tv/...`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Envelope for listing endpoints (`{ "results": [...] }`).
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    pub results: Vec<RawItem>,
}

/// A single raw item as returned by the TMDB listing endpoints.
///
/// Movies carry `title`/`release_date`, TV shows `name`/`first_air_date`;
/// the trending endpoints additionally set `media_type` explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub media_type: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
}

/// Response of `GET /{kind}/{id}/external_ids`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalIds {
    pub imdb_id: Option<String>,
}

//! Shaping of raw TMDB items into listing records.

use serde::{Deserialize, Serialize};

use super::genres;
use crate::tmdb::{MediaKind, RawItem, POSTER_BASE_URL};

/// A single formatted entry in a catalog listing.
///
/// `id` is the IMDb identifier; items whose identifier cannot be resolved
/// never become a `ListingItem` at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingItem {
    pub id: String,
    pub title: String,
    pub media_type: MediaKind,
    pub rating: f64,
    pub poster: Option<String>,
    pub genres: Vec<String>,
}

/// Determine whether a raw item is a movie or a TV show.
///
/// The explicit `media_type` field wins when it names a kind we serve;
/// otherwise a non-empty `first_air_date` marks the item as TV, and
/// everything else defaults to movie.
pub fn media_kind(raw: &RawItem) -> MediaKind {
    match raw.media_type.as_deref() {
        Some("movie") => MediaKind::Movie,
        Some("tv") => MediaKind::Tv,
        _ => {
            if raw
                .first_air_date
                .as_deref()
                .is_some_and(|d| !d.is_empty())
            {
                MediaKind::Tv
            } else {
                MediaKind::Movie
            }
        }
    }
}

/// Full poster URL for a TMDB poster path fragment.
pub fn poster_url(path: &str) -> String {
    format!("{POSTER_BASE_URL}{path}")
}

/// Build a [`ListingItem`] from a raw item and its resolved IMDb ID.
pub fn to_listing_item(raw: RawItem, kind: MediaKind, imdb_id: String) -> ListingItem {
    let genres = genres::labels_for(kind, &raw.genre_ids);
    ListingItem {
        id: imdb_id,
        title: raw.title.or(raw.name).unwrap_or_default(),
        media_type: kind,
        rating: raw.vote_average,
        poster: raw.poster_path.as_deref().map(poster_url),
        genres,
    }
}

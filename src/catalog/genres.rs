//! Genre ID to label mapping.
//!
//! TMDB reports genres as numeric IDs with separate vocabularies for
//! movies and TV. Each ID maps to zero or more of our label strings, and
//! the flattened result is filtered against [`RECOGNIZED_GENRES`]. IDs
//! whose labels are not recognized (history, news, reality, talk, war)
//! contribute nothing. Duplicate labels are kept as-is: two IDs mapping to
//! the same label produce it twice.

use crate::tmdb::MediaKind;

/// Labels the API is allowed to emit.
pub const RECOGNIZED_GENRES: &[&str] = &[
    "action",
    "adventure",
    "animation",
    "anime",
    "comedy",
    "crime",
    "documentary",
    "drama",
    "family",
    "fantasy",
    "horror",
    "music",
    "musical",
    "mystery",
    "romance",
    "sci-fi",
    "sport",
    "thriller",
    "western",
];

/// Labels for a TMDB movie genre ID.
fn movie_labels(id: i64) -> &'static [&'static str] {
    match id {
        28 => &["action"],
        12 => &["adventure"],
        16 => &["animation"],
        35 => &["comedy"],
        80 => &["crime"],
        99 => &["documentary"],
        18 => &["drama"],
        10751 => &["family"],
        14 => &["fantasy"],
        36 => &["history"],
        27 => &["horror"],
        10402 => &["music", "musical"],
        9648 => &["mystery"],
        10749 => &["romance"],
        878 => &["sci-fi"],
        // TV Movie
        10770 => &["drama"],
        53 => &["thriller"],
        10752 => &["war"],
        37 => &["western"],
        _ => &[],
    }
}

/// Labels for a TMDB TV genre ID.
fn tv_labels(id: i64) -> &'static [&'static str] {
    match id {
        10759 => &["action", "adventure"],
        16 => &["animation", "anime"],
        35 => &["comedy"],
        80 => &["crime"],
        99 => &["documentary"],
        18 => &["drama"],
        10751 => &["family"],
        // Kids
        10762 => &["family"],
        9648 => &["mystery"],
        10763 => &["news"],
        10764 => &["reality"],
        10765 => &["sci-fi", "fantasy"],
        // Soap
        10766 => &["drama"],
        10767 => &["talk"],
        // War & Politics
        10768 => &["war"],
        37 => &["western"],
        _ => &[],
    }
}

/// Map a raw genre ID list to recognized labels, preserving order.
pub fn labels_for(kind: MediaKind, ids: &[i64]) -> Vec<String> {
    let table = match kind {
        MediaKind::Movie => movie_labels,
        MediaKind::Tv => tv_labels,
    };

    ids.iter()
        .flat_map(|&id| table(id).iter().copied())
        .filter(|label| RECOGNIZED_GENRES.contains(label))
        .map(str::to_string)
        .collect()
}

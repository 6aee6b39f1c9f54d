//! Static route table.
//!
//! Maps a `(category, type)` pair from the request path to the fixed TMDB
//! query path the proxy forwards to. Anything outside this table is
//! rejected before any network call.

/// All valid `(category, type)` pairs; `all` exists only under `trending`.
pub const VALID_ROUTES: &[(&str, &str)] = &[
    ("trending", "all"),
    ("trending", "movie"),
    ("trending", "tv"),
    ("popular", "movie"),
    ("popular", "tv"),
    ("top-rated", "movie"),
    ("top-rated", "tv"),
    ("discover", "movie"),
    ("discover", "tv"),
];

/// Look up the upstream query path for a `(category, type)` pair.
pub fn upstream_path(category: &str, kind: &str) -> Option<&'static str> {
    Some(match (category, kind) {
        ("trending", "all") => "/trending/all/day?language=en-US",
        ("trending", "movie") => "/trending/movie/day?language=en-US",
        ("trending", "tv") => "/trending/tv/day?language=en-US",
        ("popular", "movie") => "/movie/popular?language=en-US&page=1",
        ("popular", "tv") => "/tv/popular?language=en-US&page=1",
        ("top-rated", "movie") => "/movie/top_rated?language=en-US&page=1",
        ("top-rated", "tv") => "/tv/top_rated?language=en-US&page=1",
        ("discover", "movie") => {
            "/discover/movie?include_adult=false&include_video=false&language=en-US&page=1&sort_by=popularity.desc"
        }
        ("discover", "tv") => {
            "/discover/tv?include_adult=false&include_video=false&language=en-US&page=1&sort_by=popularity.desc"
        }
        _ => return None,
    })
}

pub mod omdb;
pub mod provider;
pub mod search;

use thiserror::Error;

/// Sentinel OMDb returns for any field it has no value for.
pub const NOT_AVAILABLE: &str = "N/A";

/// Local placeholder shown when a record has no real poster URL.
pub const PLACEHOLDER_POSTER: &str = "/placeholder-movie.svg";

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("OMDb API key not configured")]
    MissingApiKey,
    #[error("network error: {0}")]
    Network(String),
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("{0}")]
    NotFound(String),
}

/// Replace the provider's "no poster" sentinel with the local placeholder.
///
/// Renderers only ever see a usable reference; the sentinel never leaves
/// the gateway.
pub fn poster_or_placeholder(raw: Option<&str>) -> String {
    match raw {
        Some(url) if !url.is_empty() && url != NOT_AVAILABLE => url.to_string(),
        _ => PLACEHOLDER_POSTER.to_string(),
    }
}

/// Full record for a single title, mapped field-by-field from the provider
/// envelope. Every text field may hold the `N/A` sentinel; only the poster
/// is substituted.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub kind: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster_url: String,
    pub ratings: Vec<Rating>,
    pub metascore: String,
    pub imdb_rating: String,
    pub imdb_votes: String,
    pub dvd: String,
    pub box_office: String,
    pub production: String,
    pub website: String,
}

/// One rating aggregate, e.g. source "Rotten Tomatoes", value "87%".
/// Sources are opaque; order is whatever the provider sent.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rating {
    pub source: String,
    pub value: String,
}

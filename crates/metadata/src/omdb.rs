//! OMDb (Open Movie Database) provider client.
//!
//! Uses the OMDb API: https://www.omdbapi.com/

use tracing::debug;

use crate::provider::{MovieProvider, MovieSummary, SearchPage};
use crate::{MovieDetail, NOT_AVAILABLE, ProviderError, Rating, poster_or_placeholder};

const BASE_URL: &str = "https://www.omdbapi.com/";

pub struct OmdbClient {
    api_key: Option<String>,
    client: reqwest::Client,
}

impl OmdbClient {
    /// The key is injected once here; an empty string counts as absent.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json(&self, params: &[(&str, &str)]) -> Result<serde_json::Value, ProviderError> {
        // Must fail before any network activity when the key is missing.
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        debug!(?params, "OMDb request");

        let mut all_params = vec![("apikey", api_key)];
        all_params.extend_from_slice(params);

        let resp = self
            .client
            .get(BASE_URL)
            .query(&all_params)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ProviderError::Upstream(format!(
                "OMDb returned {}",
                resp.status()
            )));
        }

        let data: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ProviderError::Upstream(format!("parse JSON: {e}")))?;

        reject_envelope_failure(&data)?;
        Ok(data)
    }
}

#[async_trait::async_trait]
impl MovieProvider for OmdbClient {
    fn name(&self) -> &str {
        "omdb"
    }

    async fn search_titles(&self, query: &str) -> Result<SearchPage, ProviderError> {
        // reqwest percent-encodes the query when building the query string.
        let data = self.get_json(&[("s", query)]).await?;
        Ok(parse_search_page(&data))
    }

    async fn get_title(&self, imdb_id: &str) -> Result<MovieDetail, ProviderError> {
        let data = self.get_json(&[("i", imdb_id)]).await?;
        Ok(parse_detail(&data))
    }
}

/// OMDb signals "no match" inside an HTTP 200 body, not via the status
/// line: `"Response": "False"` plus an `Error` message.
fn reject_envelope_failure(data: &serde_json::Value) -> Result<(), ProviderError> {
    if data["Response"].as_str() == Some("False") {
        return Err(ProviderError::NotFound(
            data["Error"]
                .as_str()
                .unwrap_or("no matching title")
                .to_string(),
        ));
    }
    Ok(())
}

fn text(data: &serde_json::Value, key: &str) -> String {
    data[key].as_str().unwrap_or(NOT_AVAILABLE).to_string()
}

fn parse_summary(row: &serde_json::Value) -> MovieSummary {
    MovieSummary {
        imdb_id: text(row, "imdbID"),
        title: text(row, "Title"),
        year: text(row, "Year"),
        kind: text(row, "Type"),
        poster_url: poster_or_placeholder(row["Poster"].as_str()),
    }
}

fn parse_search_page(data: &serde_json::Value) -> SearchPage {
    let rows = data["Search"].as_array().cloned().unwrap_or_default();

    SearchPage {
        movies: rows.iter().map(parse_summary).collect(),
        total_results: data["totalResults"].as_str().unwrap_or("0").to_string(),
    }
}

fn parse_detail(data: &serde_json::Value) -> MovieDetail {
    MovieDetail {
        imdb_id: text(data, "imdbID"),
        title: text(data, "Title"),
        year: text(data, "Year"),
        kind: text(data, "Type"),
        rated: text(data, "Rated"),
        released: text(data, "Released"),
        runtime: text(data, "Runtime"),
        genre: text(data, "Genre"),
        director: text(data, "Director"),
        writer: text(data, "Writer"),
        actors: text(data, "Actors"),
        plot: text(data, "Plot"),
        language: text(data, "Language"),
        country: text(data, "Country"),
        awards: text(data, "Awards"),
        poster_url: poster_or_placeholder(data["Poster"].as_str()),
        ratings: data["Ratings"]
            .as_array()
            .map(|rs| {
                rs.iter()
                    .map(|r| Rating {
                        source: text(r, "Source"),
                        value: text(r, "Value"),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        metascore: text(data, "Metascore"),
        imdb_rating: text(data, "imdbRating"),
        imdb_votes: text(data, "imdbVotes"),
        dvd: text(data, "DVD"),
        box_office: text(data, "BoxOffice"),
        production: text(data, "Production"),
        website: text(data, "Website"),
    }
}

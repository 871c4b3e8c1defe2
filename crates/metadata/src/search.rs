//! Search outcome normalization.
//!
//! Classification rules:
//! 1. A gateway failure becomes `Error` carrying the error's message.
//! 2. A successful call with no rows becomes `Empty`.
//! 3. Anything else becomes `Results` with duplicate identifiers removed:
//!    the first occurrence wins and survivors keep their relative order.

use std::collections::HashSet;

use crate::ProviderError;
use crate::provider::{MovieProvider, MovieSummary, SearchPage};

/// What a search produced, for the page that renders it. Exactly one
/// variant; outcome errors are page content, not transport failures.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum SearchOutcome {
    Results(Vec<MovieSummary>),
    Empty,
    Error(String),
}

/// Search via the given provider and classify the result. Stateless; each
/// call is independent.
pub async fn run(provider: &dyn MovieProvider, query: &str) -> SearchOutcome {
    normalize(provider.search_titles(query).await)
}

/// Pure classification of one gateway result.
pub fn normalize(outcome: Result<SearchPage, ProviderError>) -> SearchOutcome {
    match outcome {
        Err(e) => SearchOutcome::Error(e.to_string()),
        Ok(page) if page.movies.is_empty() => SearchOutcome::Empty,
        Ok(page) => SearchOutcome::Results(dedup_by_id(page.movies)),
    }
}

/// Drop rows whose identifier was already seen, keeping the first
/// occurrence and the relative order of survivors. Not a sort.
fn dedup_by_id(movies: Vec<MovieSummary>) -> Vec<MovieSummary> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(movies.len());
    for movie in movies {
        if seen.insert(movie.imdb_id.clone()) {
            unique.push(movie);
        }
    }
    unique
}

use crate::{MovieDetail, ProviderError};

/// A metadata provider that can search titles and fetch full records.
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Search by free-text query. Returns the provider's rows in provider
    /// order, duplicates intact; deduplication is the normalizer's job.
    async fn search_titles(&self, query: &str) -> Result<SearchPage, ProviderError>;

    /// Fetch the full record for a provider-issued identifier.
    async fn get_title(&self, imdb_id: &str) -> Result<MovieDetail, ProviderError>;
}

/// One search-result row.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    /// Free-form provider text, e.g. "2003–2011" for a series. Never parsed.
    pub year: String,
    /// Opaque provider tag ("movie", "series", "episode", …); not validated.
    pub kind: String,
    pub poster_url: String,
}

/// One page of search results plus the provider's total-count text.
/// The count is carried through but drives no pagination here.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SearchPage {
    pub movies: Vec<MovieSummary>,
    pub total_results: String,
}

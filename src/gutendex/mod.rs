//! Client for the Gutendex API, which serves Project Gutenberg metadata.

pub mod schema;

use tracing::{debug, instrument};

use crate::error::Result;

pub use schema::{ExternalAuthor, ExternalBook, SearchResults};

pub struct GutendexClient {
    http:     reqwest::Client,
    base_url: String,
}

impl GutendexClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http:     reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Searches by title and returns the first page of results.
    pub async fn search(&self, title: &str) -> Result<Vec<ExternalBook>> {
        let body = self.fetch(title).await?;
        Ok(decode(&body)?.results)
    }

    /// Raw response body of a title search.
    #[instrument(skip(self))]
    pub async fn fetch(&self, title: &str) -> Result<String> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("search", title)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!(bytes = resp.len(), "received search response");
        Ok(resp)
    }
}

pub fn decode(body: &str) -> Result<SearchResults> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    Ok(serde_path_to_error::deserialize(deserializer)?)
}

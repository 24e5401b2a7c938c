use tracing::instrument;

use crate::{
    consolidate::{consolidate, ConsolidatedAuthor},
    error::Result,
    gutendex::ExternalBook,
    ingest::{ingest, IngestReport},
    store::CatalogStore,
    types::book::Book,
};

/// Read and write operations over the stored catalog.
pub struct Catalog<S> {
    store: S,
}

impl<S: CatalogStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn ingest(&self, books: &[ExternalBook]) -> Result<IngestReport> {
        ingest(&self.store, books).await
    }

    pub async fn books(&self) -> Result<Vec<Book>> {
        self.store.find_all_books().await
    }

    pub async fn authors(&self) -> Result<Vec<ConsolidatedAuthor>> {
        let rows = self.store.find_all_authors().await?;
        Ok(consolidate(&rows))
    }

    /// Authors with known birth and death years enclosing `year`. Rows are filtered before
    /// they are merged.
    #[instrument(skip(self))]
    pub async fn authors_alive_in(&self, year: i32) -> Result<Vec<ConsolidatedAuthor>> {
        let rows = self.store.find_authors_alive_in(year).await?;
        Ok(consolidate(&rows))
    }

    /// Books whose language list contains exactly `code`.
    #[instrument(skip(self))]
    pub async fn books_by_language(&self, code: &str) -> Result<Vec<Book>> {
        self.store.find_books_by_language(code).await
    }
}

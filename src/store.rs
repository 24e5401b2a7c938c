//! Persistence for the catalog.
//!
//! [`CatalogStore`] is what ingestion and the query service depend on; [`SqliteStore`] is the
//! implementation backed by a local SQLite file.

use std::path::Path;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};
use tracing::{debug, instrument};

use crate::{
    error::{is_unique_violation, Result},
    traits::*,
    types::{
        author::Author, book::Book, book_author::BookAuthor, book_language::BookLanguage,
    },
};

/// Result of trying to store one book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Stored,
    /// A book with the same natural key is already stored; nothing was written.
    AlreadyExists,
}

pub trait CatalogStore {
    /// Stores a book with its authors and languages as one unit.
    async fn save(&self, book: &Book) -> Result<SaveOutcome>;

    async fn find_all_books(&self) -> Result<Vec<Book>>;

    async fn find_books_by_language(&self, code: &str) -> Result<Vec<Book>>;

    /// Author rows as stored, one per book they were imported with.
    async fn find_all_authors(&self) -> Result<Vec<Author>>;

    /// Author rows with both years known and `birth_year <= year <= death_year`.
    async fn find_authors_alive_in(&self, year: i32) -> Result<Vec<Author>>;

    async fn count_books(&self) -> Result<i64>;
}

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if needed) the catalog database at `path`.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub async fn connect(path: &Path) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(path)
                    .journal_mode(SqliteJournalMode::Wal)
                    .create_if_missing(true),
            )
            .await?;
        let store = Self { pool };
        store.create_tables().await?;
        Ok(store)
    }

    /// A private database that lives as long as the store.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { pool };
        store.create_tables().await?;
        Ok(store)
    }

    async fn create_tables(&self) -> Result<()> {
        Book::create_table(&self.pool).await?;
        Author::create_table(&self.pool).await?;
        BookAuthor::create_table(&self.pool).await?;
        BookLanguage::create_table(&self.pool).await?;
        Ok(())
    }
}

impl CatalogStore for SqliteStore {
    async fn save(&self, book: &Book) -> Result<SaveOutcome> {
        let mut tx = self.pool.begin().await?;
        match book.insert(&mut *tx).await {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                debug!(key = %book.natural_key, "natural key already present");
                tx.rollback().await?;
                return Ok(SaveOutcome::AlreadyExists);
            }
            Err(e) => return Err(e.into()),
        }
        for language in BookLanguage::for_book(book) {
            language.insert(&mut *tx).await?;
        }
        for author in &book.authors {
            author.insert(&mut *tx).await?;
            BookAuthor {
                book_id:   book.id.clone(),
                author_id: author.id.clone(),
            }
            .insert(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(SaveOutcome::Stored)
    }

    async fn find_all_books(&self) -> Result<Vec<Book>> {
        Ok(Book::get_all_hydrated(&self.pool).await?)
    }

    async fn find_books_by_language(&self, code: &str) -> Result<Vec<Book>> {
        Ok(Book::get_by_language(&self.pool, code).await?)
    }

    async fn find_all_authors(&self) -> Result<Vec<Author>> {
        Ok(Author::get_all_hydrated(&self.pool).await?)
    }

    async fn find_authors_alive_in(&self, year: i32) -> Result<Vec<Author>> {
        Ok(Author::get_alive_in(&self.pool, year).await?)
    }

    async fn count_books(&self) -> Result<i64> {
        Ok(Book::count(&self.pool).await?)
    }
}

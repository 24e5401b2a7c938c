use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::{
    sqlite::{SqliteQueryResult, SqliteRow},
    FromRow, Row, SqliteConnection, SqlitePool,
};
use std::fmt::Write;

use crate::{
    config::{self, Styleable},
    traits::*,
    types::{
        author::Author, book_author::BookAuthor, book_language::BookLanguage, text::Text,
        uuid::Uuid,
    },
};
use derives::*;

#[derive(Default, Debug, Clone, PartialEq, Eq, Names, Serialize, Deserialize)]
pub struct Book {
    pub id:             Uuid,
    /// Identifier assigned by Gutendex, if the record carried one.
    pub gutendex_id:    Option<i64>,
    /// Unique per external work, see [`crate::ingest::natural_key`].
    pub natural_key:    Text,
    pub title:          Text,
    pub download_count: i64,
    pub languages:      Vec<String>,
    pub authors:        Vec<Author>,
}

/// A book as referenced from an author row.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, FromRow, Serialize, Deserialize)]
pub struct LinkedBook {
    pub id:    Uuid,
    pub title: Text,
}

impl From<&Book> for LinkedBook {
    fn from(book: &Book) -> Self {
        Self {
            id:    book.id.clone(),
            title: book.title.clone(),
        }
    }
}

impl std::fmt::Display for LinkedBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl Book {
    pub async fn hydrate(&mut self, conn: &SqlitePool) -> sqlx::Result<()> {
        self.languages = BookLanguage::get_codes_for_book(conn, &self.id).await?;
        self.authors = Author::get_all_for_book(conn, &self.id).await?;
        Ok(())
    }

    pub async fn get_all_hydrated(conn: &SqlitePool) -> sqlx::Result<Vec<Self>> {
        let mut books = Self::get_all(conn).await?;
        for book in books.iter_mut() {
            book.hydrate(conn).await?;
        }
        Ok(books)
    }

    /// Books whose language list contains `code` exactly.
    pub async fn get_by_language(conn: &SqlitePool, code: &str) -> sqlx::Result<Vec<Self>> {
        let sql = format!(
            r#"
            SELECT b.* FROM {books} b
            WHERE EXISTS (
                SELECT 1 FROM {languages} bl
                WHERE bl.book_id = b.id AND bl.code = ?1
            )
            ORDER BY b.rowid;
            "#,
            books = Self::TABLE_NAME,
            languages = BookLanguage::TABLE_NAME,
        );
        let mut books = sqlx::query_as::<_, Self>(&sql)
            .bind(code)
            .fetch_all(conn)
            .await?;
        for book in books.iter_mut() {
            book.hydrate(conn).await?;
        }
        Ok(books)
    }

    pub async fn get_linked_to_author(
        conn: &SqlitePool,
        author_id: &Uuid,
    ) -> sqlx::Result<Vec<LinkedBook>> {
        let sql = format!(
            r#"
            SELECT b.id, b.title FROM {books} b
            JOIN {junction} ba ON ba.book_id = b.id
            WHERE ba.author_id = ?1
            ORDER BY b.rowid;
            "#,
            books = Self::TABLE_NAME,
            junction = <BookAuthor as JunctionTable<Book, Author>>::TABLE_NAME,
        );
        sqlx::query_as::<_, LinkedBook>(&sql)
            .bind(author_id)
            .fetch_all(conn)
            .await
    }
}

impl Queryable for Book {}

impl FromRow<'_, SqliteRow> for Book {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id:             row.try_get("id")?,
            gutendex_id:    row.try_get("gutendex_id")?,
            natural_key:    row.try_get("natural_key")?,
            title:          row.try_get("title")?,
            download_count: row.try_get("download_count")?,
            languages:      vec![],
            authors:        vec![],
        })
    }
}

impl CreateTable for Book {
    async fn create_table(conn: &SqlitePool) -> sqlx::Result<()> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id TEXT PRIMARY KEY NOT NULL,
                gutendex_id INTEGER,
                natural_key TEXT NOT NULL UNIQUE,
                title TEXT NOT NULL,
                download_count INTEGER NOT NULL DEFAULT 0
            );"#,
            Self::TABLE_NAME
        ))
        .execute(conn)
        .await?;
        Ok(())
    }
}

impl Insertable for Book {
    async fn insert(&self, conn: &mut SqliteConnection) -> sqlx::Result<SqliteQueryResult> {
        sqlx::query(&format!(
            r#"
            INSERT INTO {} ( id, gutendex_id, natural_key, title, download_count )
            VALUES ( ?1, ?2, ?3, ?4, ?5 )
            "#,
            Self::TABLE_NAME
        ))
        .bind(&self.id)
        .bind(self.gutendex_id)
        .bind(&self.natural_key)
        .bind(&self.title)
        .bind(self.download_count)
        .execute(conn)
        .await
    }
}

impl DisplayTerminal for Book {
    fn fmt(&self, f: &mut String, config: &config::Config) -> Result<()> {
        write!(f, "{}", self.title.style(&config.output_book.style_content))?;
        if !self.authors.is_empty() {
            write!(
                f,
                " {}",
                config
                    .output_author
                    .format_vec(self.authors.iter().map(|x| &x.name))
            )?;
        }
        if !self.languages.is_empty() {
            write!(
                f,
                " {}",
                config.output_language.format_vec(self.languages.iter())
            )?;
        }
        write!(
            f,
            " {}",
            config.output_download_count.format_str(self.download_count)
        )?;
        Ok(())
    }
}

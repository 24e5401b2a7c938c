use std::fmt::Display;

use serde::{Deserialize, Serialize};
use sqlx::{
    sqlite::{SqliteQueryResult, SqliteRow},
    FromRow, Row, SqliteConnection, SqlitePool,
};

use crate::{
    traits::*,
    types::{
        book::{Book, LinkedBook},
        book_author::BookAuthor,
        text::Text,
        uuid::Uuid,
    },
};
use derives::*;

/// One stored author row. The same person can be stored once per imported book, so rows are
/// merged by name before they are shown, see [`crate::consolidate`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Names, Serialize, Deserialize)]
pub struct Author {
    pub id:         Uuid,
    pub name:       Text,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub books:      Vec<LinkedBook>,
}

impl Author {
    pub async fn hydrate(&mut self, conn: &SqlitePool) -> sqlx::Result<()> {
        self.books = Book::get_linked_to_author(conn, &self.id).await?;
        Ok(())
    }

    pub async fn get_all_hydrated(conn: &SqlitePool) -> sqlx::Result<Vec<Self>> {
        let mut authors = Self::get_all(conn).await?;
        for author in authors.iter_mut() {
            author.hydrate(conn).await?;
        }
        Ok(authors)
    }

    /// Rows with both years known and `birth_year <= year <= death_year`.
    pub async fn get_alive_in(conn: &SqlitePool, year: i32) -> sqlx::Result<Vec<Self>> {
        let sql = format!(
            r#"
            SELECT * FROM {}
            WHERE birth_year IS NOT NULL
                AND death_year IS NOT NULL
                AND birth_year <= ?1
                AND death_year >= ?1
            ORDER BY rowid;
            "#,
            Self::TABLE_NAME
        );
        let mut authors = sqlx::query_as::<_, Self>(&sql)
            .bind(year)
            .fetch_all(conn)
            .await?;
        for author in authors.iter_mut() {
            author.hydrate(conn).await?;
        }
        Ok(authors)
    }

    pub async fn get_all_for_book(conn: &SqlitePool, book_id: &Uuid) -> sqlx::Result<Vec<Self>> {
        let sql = format!(
            r#"
            SELECT a.* FROM {authors} a
            JOIN {junction} ba ON ba.author_id = a.id
            WHERE ba.book_id = ?1
            ORDER BY a.rowid;
            "#,
            authors = Self::TABLE_NAME,
            junction = <BookAuthor as JunctionTable<Book, Author>>::TABLE_NAME,
        );
        sqlx::query_as::<_, Self>(&sql)
            .bind(book_id)
            .fetch_all(conn)
            .await
    }
}

impl Queryable for Author {}

impl FromRow<'_, SqliteRow> for Author {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id:         row.try_get("id")?,
            name:       row.try_get("name")?,
            birth_year: row.try_get("birth_year")?,
            death_year: row.try_get("death_year")?,
            books:      vec![],
        })
    }
}

impl CreateTable for Author {
    async fn create_table(conn: &SqlitePool) -> sqlx::Result<()> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL CHECK (length(trim(name)) > 0),
                birth_year INTEGER,
                death_year INTEGER
            );"#,
            Self::TABLE_NAME
        ))
        .execute(conn)
        .await?;
        Ok(())
    }
}

impl Insertable for Author {
    async fn insert(&self, conn: &mut SqliteConnection) -> sqlx::Result<SqliteQueryResult> {
        sqlx::query(&format!(
            r#"
            INSERT INTO {} ( id, name, birth_year, death_year )
            VALUES ( ?1, ?2, ?3, ?4 )
            "#,
            Self::TABLE_NAME
        ))
        .bind(&self.id)
        .bind(&self.name)
        .bind(self.birth_year)
        .bind(self.death_year)
        .execute(conn)
        .await
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

use const_format::formatcp;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteQueryResult, FromRow, SqliteConnection, SqlitePool};

use crate::{
    traits::*,
    types::{author::Author, book::Book, uuid::Uuid},
};

#[derive(Default, Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct BookAuthor {
    pub book_id:   Uuid,
    pub author_id: Uuid,
}

impl JunctionTable<Book, Author> for BookAuthor {
    const TABLE_NAME: &'static str = formatcp!("{}_{}", Book::NAME_SINGULAR, Author::NAME_SINGULAR);
}

impl CreateTable for BookAuthor {
    async fn create_table(conn: &SqlitePool) -> sqlx::Result<()> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                book_id TEXT NOT NULL REFERENCES {}(id),
                author_id TEXT NOT NULL REFERENCES {}(id),
                PRIMARY KEY (book_id, author_id)
            );"#,
            <Self as JunctionTable<Book, Author>>::TABLE_NAME,
            Book::TABLE_NAME,
            Author::TABLE_NAME,
        ))
        .execute(conn)
        .await?;
        Ok(())
    }
}

impl Insertable for BookAuthor {
    async fn insert(&self, conn: &mut SqliteConnection) -> sqlx::Result<SqliteQueryResult> {
        sqlx::query(&format!(
            r#"
            INSERT INTO {} ( book_id, author_id )
            VALUES ( ?1, ?2 )
            "#,
            <Self as JunctionTable<Book, Author>>::TABLE_NAME,
        ))
        .bind(&self.book_id)
        .bind(&self.author_id)
        .execute(conn)
        .await
    }
}

use const_format::formatcp;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteQueryResult, FromRow, SqliteConnection, SqlitePool};

use crate::{
    traits::*,
    types::{book::Book, text::Text, uuid::Uuid},
};

/// A language code of a book. `position` keeps the order the source listed them in.
#[derive(Default, Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct BookLanguage {
    pub book_id:  Uuid,
    pub position: i64,
    pub code:     Text,
}

impl Names for BookLanguage {
    const NAME_SINGULAR: &'static str = formatcp!("{}_language", Book::NAME_SINGULAR);
    const NAME_PLURAL: &'static str = formatcp!("{}_languages", Book::NAME_SINGULAR);
    const TABLE_NAME: &'static str = Self::NAME_SINGULAR;
}

impl BookLanguage {
    pub fn for_book(book: &Book) -> Vec<Self> {
        book.languages
            .iter()
            .enumerate()
            .map(|(position, code)| Self {
                book_id:  book.id.clone(),
                position: position as i64,
                code:     Text(code.clone()),
            })
            .collect()
    }

    pub async fn get_codes_for_book(conn: &SqlitePool, book_id: &Uuid) -> sqlx::Result<Vec<String>> {
        let sql = format!(
            "SELECT code FROM {} WHERE book_id = ?1 ORDER BY position;",
            Self::TABLE_NAME
        );
        sqlx::query_scalar::<_, String>(&sql)
            .bind(book_id)
            .fetch_all(conn)
            .await
    }
}

impl CreateTable for BookLanguage {
    async fn create_table(conn: &SqlitePool) -> sqlx::Result<()> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                book_id TEXT NOT NULL REFERENCES {}(id),
                position INTEGER NOT NULL,
                code TEXT NOT NULL,
                PRIMARY KEY (book_id, position)
            );"#,
            Self::TABLE_NAME,
            Book::TABLE_NAME,
        ))
        .execute(conn)
        .await?;
        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS {0}_code ON {0} (code);",
            Self::TABLE_NAME,
        ))
        .execute(conn)
        .await?;
        Ok(())
    }
}

impl Insertable for BookLanguage {
    async fn insert(&self, conn: &mut SqliteConnection) -> sqlx::Result<SqliteQueryResult> {
        sqlx::query(&format!(
            r#"
            INSERT INTO {} ( book_id, position, code )
            VALUES ( ?1, ?2, ?3 )
            "#,
            Self::TABLE_NAME
        ))
        .bind(&self.book_id)
        .bind(self.position)
        .bind(&self.code)
        .execute(conn)
        .await
    }
}

use anyhow::Result;
use sqlx::{
    sqlite::{SqliteQueryResult, SqliteRow},
    FromRow, SqliteConnection, SqlitePool,
};

use crate::config::Config;

pub trait Names {
    const NAME_SINGULAR: &'static str;
    const NAME_PLURAL: &'static str;
    const TABLE_NAME: &'static str;
}

pub trait CreateTable {
    async fn create_table(conn: &SqlitePool) -> sqlx::Result<()>;
}

/// Rows are always written through a connection so callers can group them in one transaction.
pub trait Insertable {
    async fn insert(&self, conn: &mut SqliteConnection) -> sqlx::Result<SqliteQueryResult>;
}

pub trait Queryable: Names + for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    async fn get_all(conn: &SqlitePool) -> sqlx::Result<Vec<Self>> {
        let sql = format!("SELECT * FROM {}", Self::TABLE_NAME);
        sqlx::query_as::<_, Self>(&sql).fetch_all(conn).await
    }

    async fn count(conn: &SqlitePool) -> sqlx::Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", Self::TABLE_NAME);
        sqlx::query_scalar::<_, i64>(&sql).fetch_one(conn).await
    }
}

pub trait JunctionTable<A: Names, B: Names> {
    const TABLE_NAME: &'static str;
}

pub trait DisplayTerminal {
    fn fmt(&self, f: &mut String, config: &Config) -> Result<()>;

    fn fmt_to_string(&self, config: &Config) -> Result<String> {
        let mut s = String::new();
        DisplayTerminal::fmt(self, &mut s, config)?;
        Ok(s)
    }
}

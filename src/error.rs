//! Error types shared by ingestion and the catalog queries.
//!
//! A work that is already stored is not an error: store writes report it as
//! [`SaveOutcome::AlreadyExists`](crate::store::SaveOutcome::AlreadyExists).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The bibliographic API could not be reached or answered with a non-success status.
    #[error("bibliographic API unavailable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    /// The API answered, but the body is not the expected search result shape.
    #[error("malformed API response at `{}`: {}", .0.path(), .0.inner())]
    MalformedResponse(#[from] serde_path_to_error::Error<serde_json::Error>),

    /// Any store failure other than a uniqueness violation.
    #[error("unrecoverable persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Whether a store error is a uniqueness violation, which ingestion treats as a duplicate.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(database_error) => database_error.is_unique_violation(),
        _ => false,
    }
}

//! Turns Gutendex search results into catalog rows.
//!
//! [`normalize`] is a pure mapping from one external record to one [`Book`] with freshly
//! created [`Author`] rows. [`ingest`] writes a batch of them, treating works that are already
//! stored as skips rather than failures.

use tracing::{info, warn};

use crate::{
    error::Result,
    gutendex::{ExternalAuthor, ExternalBook},
    store::{CatalogStore, SaveOutcome},
    types::{author::Author, book::Book, text::Text, uuid::Uuid},
};

/// Key identifying an external work: the Gutendex id when there is one, otherwise the
/// normalized title and author names.
pub fn natural_key(book: &ExternalBook) -> String {
    match book.id {
        Some(id) => format!("gutendex:{id}"),
        None => {
            let authors = book
                .authors
                .iter()
                .flatten()
                .map(|x| x.name.trim().to_lowercase())
                .collect::<Vec<String>>()
                .join(";");
            format!("work:{}|{}", book.title.trim().to_lowercase(), authors)
        }
    }
}

pub fn normalize(book: &ExternalBook) -> Book {
    let authors = book
        .authors
        .iter()
        .flatten()
        .filter_map(normalize_author)
        .collect();
    Book {
        id: Uuid::new_v4(),
        gutendex_id: book.id,
        natural_key: Text(natural_key(book)),
        title: Text(book.title.clone()),
        download_count: book.download_count.unwrap_or(0),
        languages: book.languages.clone().unwrap_or_default(),
        authors,
    }
}

fn normalize_author(author: &ExternalAuthor) -> Option<Author> {
    if author.name.trim().is_empty() {
        warn!("dropping author without a name");
        return None;
    }
    Some(Author {
        id:         Uuid::new_v4(),
        name:       Text(author.name.clone()),
        birth_year: author.birth_year,
        death_year: author.death_year,
        books:      vec![],
    })
}

/// What happened to one search batch.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// Titles of every result, in the order the API returned them.
    pub found:   Vec<String>,
    pub stored:  Vec<String>,
    /// Titles that were already in the catalog.
    pub skipped: Vec<String>,
}

impl IngestReport {
    /// The search returned nothing at all.
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn has_duplicates(&self) -> bool {
        !self.skipped.is_empty()
    }
}

pub async fn ingest<S: CatalogStore>(store: &S, books: &[ExternalBook]) -> Result<IngestReport> {
    let mut report = IngestReport::default();
    for external in books {
        let book = normalize(external);
        report.found.push(book.title.0.clone());
        match store.save(&book).await? {
            SaveOutcome::Stored => {
                info!(title = %book.title, key = %book.natural_key, "stored book");
                report.stored.push(book.title.0);
            }
            SaveOutcome::AlreadyExists => {
                info!(title = %book.title, key = %book.natural_key, "book already stored, skipping");
                report.skipped.push(book.title.0);
            }
        }
    }
    Ok(report)
}

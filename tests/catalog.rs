use pretty_assertions::assert_eq;

use gutenshelf::{
    catalog::Catalog,
    error::CatalogError,
    gutendex::{ExternalAuthor, ExternalBook},
    ingest::normalize,
    store::{CatalogStore, SaveOutcome, SqliteStore},
    types::{author::Author, text::Text, uuid::Uuid},
};

async fn catalog() -> Catalog<SqliteStore> {
    Catalog::new(SqliteStore::in_memory().await.unwrap())
}

fn author(name: &str, birth: Option<i32>, death: Option<i32>) -> ExternalAuthor {
    ExternalAuthor {
        name:       name.into(),
        birth_year: birth,
        death_year: death,
    }
}

fn book(id: i64, title: &str, authors: Vec<ExternalAuthor>, languages: &[&str]) -> ExternalBook {
    ExternalBook {
        id:             Some(id),
        title:          title.into(),
        authors:        Some(authors),
        languages:      Some(languages.iter().map(|x| x.to_string()).collect()),
        download_count: Some(100),
    }
}

fn jane() -> ExternalAuthor {
    author("Jane Doe", Some(1800), Some(1850))
}

#[tokio::test]
async fn stores_a_search_batch() {
    let catalog = catalog().await;
    let report = catalog
        .ingest(&[
            book(1, "Alpha", vec![jane()], &["en"]),
            book(2, "Beta", vec![jane()], &["es", "en"]),
        ])
        .await
        .unwrap();
    assert_eq!(report.found, vec!["Alpha".to_string(), "Beta".to_string()]);
    assert_eq!(report.stored, vec!["Alpha".to_string(), "Beta".to_string()]);
    assert!(!report.has_duplicates());

    let books = catalog.books().await.unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[1].title, Text::from("Beta"));
    assert_eq!(books[1].languages, vec!["es".to_string(), "en".to_string()]);
    assert_eq!(books[1].authors.len(), 1);
    assert_eq!(books[1].authors[0].name, Text::from("Jane Doe"));
    assert_eq!(books[1].download_count, 100);
}

#[tokio::test]
async fn reingesting_a_book_is_a_skip() {
    let catalog = catalog().await;
    let alpha = book(1, "Alpha", vec![jane()], &["en"]);
    catalog.ingest(&[alpha.clone()]).await.unwrap();

    let report = catalog.ingest(&[alpha]).await.unwrap();
    assert!(report.stored.is_empty());
    assert_eq!(report.skipped_count(), 1);
    assert!(report.has_duplicates());
    assert_eq!(catalog.store().count_books().await.unwrap(), 1);
}

#[tokio::test]
async fn duplicates_do_not_stop_the_batch() {
    let catalog = catalog().await;
    let alpha = book(1, "Alpha", vec![jane()], &["en"]);
    catalog.ingest(&[alpha.clone()]).await.unwrap();

    let report = catalog
        .ingest(&[alpha, book(2, "Beta", vec![jane()], &["en"])])
        .await
        .unwrap();
    assert_eq!(report.skipped, vec!["Alpha".to_string()]);
    assert_eq!(report.stored, vec!["Beta".to_string()]);
    assert_eq!(catalog.store().count_books().await.unwrap(), 2);
}

#[tokio::test]
async fn skipped_duplicates_leave_no_author_rows() {
    let catalog = catalog().await;
    let alpha = book(1, "Alpha", vec![jane()], &["en"]);
    catalog.ingest(&[alpha.clone()]).await.unwrap();
    catalog.ingest(&[alpha]).await.unwrap();

    let rows = catalog.store().find_all_authors().await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn records_without_id_are_deduplicated_by_title_and_authors() {
    let catalog = catalog().await;
    let mut untitled = book(0, "Alpha", vec![jane()], &["en"]);
    untitled.id = None;
    catalog.ingest(&[untitled.clone()]).await.unwrap();
    let report = catalog.ingest(&[untitled]).await.unwrap();
    assert_eq!(report.skipped_count(), 1);
    assert_eq!(catalog.store().count_books().await.unwrap(), 1);
}

#[tokio::test]
async fn empty_search_reports_no_results() {
    let catalog = catalog().await;
    let report = catalog.ingest(&[]).await.unwrap();
    assert!(report.is_empty());
    assert!(report.stored.is_empty());
    assert!(!report.has_duplicates());
}

#[tokio::test]
async fn authors_are_consolidated_across_books() {
    let catalog = catalog().await;
    catalog
        .ingest(&[
            book(1, "Alpha", vec![jane()], &["en"]),
            book(2, "Beta", vec![jane()], &["en"]),
        ])
        .await
        .unwrap();

    assert_eq!(catalog.store().find_all_authors().await.unwrap().len(), 2);

    let authors = catalog.authors().await.unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].name, Text::from("Jane Doe"));
    assert_eq!(authors[0].birth_year, Some(1800));
    assert_eq!(authors[0].death_year, Some(1850));
    assert_eq!(authors[0].titles(), vec!["Alpha", "Beta"]);
}

#[tokio::test]
async fn authors_alive_in_a_year() {
    let catalog = catalog().await;
    catalog
        .ingest(&[
            book(1, "Alpha", vec![jane()], &["en"]),
            book(2, "Gamma", vec![author("Late Bloomer", Some(1860), None)], &["en"]),
            book(3, "Delta", vec![author("Nobody Knows", None, None)], &["en"]),
        ])
        .await
        .unwrap();

    let alive = catalog.authors_alive_in(1820).await.unwrap();
    assert_eq!(alive.len(), 1);
    assert_eq!(alive[0].name, Text::from("Jane Doe"));

    assert_eq!(catalog.authors_alive_in(1800).await.unwrap().len(), 1);
    assert_eq!(catalog.authors_alive_in(1850).await.unwrap().len(), 1);
    assert!(catalog.authors_alive_in(1851).await.unwrap().is_empty());
    for year in [1860, 1900, 2000] {
        assert!(catalog.authors_alive_in(year).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn alive_filter_runs_before_consolidation() {
    let catalog = catalog().await;
    catalog
        .ingest(&[
            book(1, "Alpha", vec![jane()], &["en"]),
            book(2, "Beta", vec![author("Jane Doe", Some(1830), Some(1850))], &["en"]),
        ])
        .await
        .unwrap();

    let alive = catalog.authors_alive_in(1820).await.unwrap();
    assert_eq!(alive.len(), 1);
    assert_eq!(alive[0].titles(), vec!["Alpha"]);
}

#[tokio::test]
async fn language_filter_matches_codes_exactly() {
    let catalog = catalog().await;
    catalog
        .ingest(&[
            book(1, "Alpha", vec![jane()], &["en"]),
            book(2, "Beta", vec![jane()], &["es", "en"]),
            book(3, "Gamma", vec![jane()], &["enm"]),
            book(4, "Delta", vec![], &["fi"]),
        ])
        .await
        .unwrap();

    let titles = |books: Vec<gutenshelf::types::book::Book>| {
        books.into_iter().map(|x| x.title.0).collect::<Vec<String>>()
    };
    assert_eq!(
        titles(catalog.books_by_language("en").await.unwrap()),
        vec!["Alpha".to_string(), "Beta".to_string()]
    );
    assert_eq!(
        titles(catalog.books_by_language("es").await.unwrap()),
        vec!["Beta".to_string()]
    );
    assert!(catalog.books_by_language("e").await.unwrap().is_empty());
    assert!(catalog.books_by_language("pt").await.unwrap().is_empty());
    assert_eq!(
        titles(catalog.books_by_language("fi").await.unwrap()),
        vec!["Delta".to_string()]
    );
}

#[tokio::test]
async fn other_store_failures_are_fatal() {
    let store = SqliteStore::in_memory().await.unwrap();
    let mut broken = normalize(&book(1, "Alpha", vec![jane()], &["en"]));
    broken.authors.push(Author {
        id: Uuid::new_v4(),
        name: Text::from(""),
        ..Author::default()
    });

    let result = store.save(&broken).await;
    assert!(matches!(result, Err(CatalogError::Persistence(_))));
    // The failed book is rolled back as a whole.
    assert_eq!(store.count_books().await.unwrap(), 0);
    assert!(store.find_all_authors().await.unwrap().is_empty());

    let retry = normalize(&book(1, "Alpha", vec![jane()], &["en"]));
    assert_eq!(store.save(&retry).await.unwrap(), SaveOutcome::Stored);
}

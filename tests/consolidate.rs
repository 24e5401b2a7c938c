use std::collections::HashSet;

use pretty_assertions::assert_eq;

use gutenshelf::{
    consolidate::consolidate,
    types::{author::Author, book::LinkedBook, text::Text, uuid::Uuid},
};

fn linked(title: &str) -> LinkedBook {
    LinkedBook {
        id:    Uuid::new_v4(),
        title: Text::from(title),
    }
}

fn row(name: &str, birth: Option<i32>, death: Option<i32>, books: Vec<LinkedBook>) -> Author {
    Author {
        id: Uuid::new_v4(),
        name: Text::from(name),
        birth_year: birth,
        death_year: death,
        books,
    }
}

#[test]
fn merges_rows_sharing_a_name() {
    let rows = vec![
        row("Jane Doe", Some(1800), Some(1850), vec![linked("Alpha")]),
        row("Jane Doe", Some(1800), Some(1850), vec![linked("Beta")]),
    ];
    let authors = consolidate(&rows);
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].name, Text::from("Jane Doe"));
    assert_eq!(authors[0].titles(), vec!["Alpha", "Beta"]);
}

#[test]
fn first_seen_years_win() {
    let rows = vec![
        row("Jane Doe", Some(1800), Some(1850), vec![linked("Alpha")]),
        row("Jane Doe", Some(1801), None, vec![linked("Beta")]),
    ];
    let authors = consolidate(&rows);
    assert_eq!(authors[0].birth_year, Some(1800));
    assert_eq!(authors[0].death_year, Some(1850));
    assert_eq!(authors[0].books.len(), 2);
}

#[test]
fn the_same_book_is_listed_once() {
    let alpha = linked("Alpha");
    let rows = vec![
        row("Jane Doe", None, None, vec![alpha.clone()]),
        row("Jane Doe", None, None, vec![alpha.clone(), linked("Beta")]),
    ];
    let authors = consolidate(&rows);
    assert_eq!(authors[0].titles(), vec!["Alpha", "Beta"]);
}

#[test]
fn bibliography_is_the_union_per_name() {
    let rows = vec![
        row("Jane Doe", None, None, vec![linked("Alpha")]),
        row("John Roe", None, None, vec![linked("Gamma")]),
        row("Jane Doe", None, None, vec![linked("Beta"), linked("Delta")]),
        row("John Roe", None, None, vec![]),
    ];
    let authors = consolidate(&rows);
    let distinct = rows.iter().map(|x| &x.name).collect::<HashSet<_>>();
    assert!(authors.len() <= distinct.len());

    for author in &authors {
        let expected = rows
            .iter()
            .filter(|x| x.name == author.name)
            .flat_map(|x| x.books.iter().map(|b| b.id.clone()))
            .collect::<HashSet<Uuid>>();
        let actual = author
            .books
            .iter()
            .map(|b| b.id.clone())
            .collect::<HashSet<Uuid>>();
        assert_eq!(actual, expected);
    }
    let names = authors
        .iter()
        .map(|x| x.name.0.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(names, vec!["Jane Doe", "John Roe"]);
}

#[test]
fn leaves_input_rows_untouched() {
    let rows = vec![
        row("Jane Doe", None, None, vec![linked("Alpha")]),
        row("Jane Doe", None, None, vec![linked("Beta")]),
    ];
    let before = rows.clone();
    let _ = consolidate(&rows);
    assert_eq!(rows, before);
}

#[test]
fn empty_input_gives_no_authors() {
    assert!(consolidate(&[]).is_empty());
}

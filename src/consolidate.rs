//! Merges author rows that share a name.
//!
//! Ingestion creates a fresh author row for every imported book, so the same person is usually
//! stored several times. [`consolidate`] groups rows by name into one [`ConsolidatedAuthor`] per
//! person, whose bibliography is the union of the books linked to each row. The first row seen
//! for a name decides the birth and death years; years on later rows are ignored.

use std::{
    collections::{HashMap, HashSet},
    fmt::Write,
};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{
    config::{self, Styleable},
    traits::DisplayTerminal,
    types::{author::Author, book::LinkedBook, text::Text, uuid::Uuid},
};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedAuthor {
    pub name:       Text,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub books:      Vec<LinkedBook>,
}

impl ConsolidatedAuthor {
    fn seed(author: &Author) -> Self {
        Self {
            name:       author.name.clone(),
            birth_year: author.birth_year,
            death_year: author.death_year,
            books:      vec![],
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.books.iter().map(|x| x.title.0.as_str()).collect()
    }
}

#[derive(Default)]
struct Fold {
    authors: Vec<ConsolidatedAuthor>,
    by_name: HashMap<Text, usize>,
    seen:    Vec<HashSet<Uuid>>,
}

impl Fold {
    fn push(mut self, author: &Author) -> Self {
        let index = match self.by_name.get(&author.name) {
            Some(index) => *index,
            None => {
                self.authors.push(ConsolidatedAuthor::seed(author));
                self.seen.push(HashSet::new());
                self.by_name
                    .insert(author.name.clone(), self.authors.len() - 1);
                self.authors.len() - 1
            }
        };
        for book in &author.books {
            if self.seen[index].insert(book.id.clone()) {
                self.authors[index].books.push(book.clone());
            }
        }
        self
    }
}

/// One entry per distinct name, in the order names first appear in `authors`.
pub fn consolidate(authors: &[Author]) -> Vec<ConsolidatedAuthor> {
    authors
        .iter()
        .fold(Fold::default(), Fold::push)
        .authors
}

impl DisplayTerminal for ConsolidatedAuthor {
    fn fmt(&self, f: &mut String, config: &config::Config) -> Result<()> {
        write!(f, "{}", self.name.style(&config.output_author.style_content))?;
        let lifespan = match (self.birth_year, self.death_year) {
            (None, None) => None,
            (birth, death) => Some(format!(
                "{} - {}",
                birth.map_or("?".to_string(), |x| x.to_string()),
                death.map_or("?".to_string(), |x| x.to_string())
            )),
        };
        if let Some(lifespan) = lifespan {
            write!(f, " {}", config.output_lifespan.format_str(lifespan))?;
        }
        if !self.books.is_empty() {
            write!(
                f,
                " {}",
                config.output_bibliography.format_vec(self.books.iter())
            )?;
        }
        Ok(())
    }
}

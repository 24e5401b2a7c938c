use serde::{Deserialize, Serialize};

/// Body of `GET /books/?search=...`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub count:   Option<u64>,
    #[serde(default)]
    pub next:    Option<String>,
    pub results: Vec<ExternalBook>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalBook {
    #[serde(default)]
    pub id:             Option<i64>,
    pub title:          String,
    #[serde(default)]
    pub authors:        Option<Vec<ExternalAuthor>>,
    #[serde(default)]
    pub languages:      Option<Vec<String>>,
    #[serde(default)]
    pub download_count: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalAuthor {
    pub name:       String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
}

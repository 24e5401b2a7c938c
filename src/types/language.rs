use std::{fmt::Display, str::FromStr};

use inquire::validator::{StringValidator, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Languages a user can filter the catalog by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    Portuguese,
    Finnish,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized language `{0}`")]
pub struct ParseLanguageError(pub String);

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Portuguese,
        Language::Finnish,
    ];

    /// Resolves free text typed by a user, ignoring case and accents.
    pub fn from_input(input: &str) -> Option<Self> {
        match fold(input).as_str() {
            "english" | "ingles" | "en" | "in" => Some(Self::English),
            "espanol" | "es" => Some(Self::Spanish),
            "frances" | "fr" => Some(Self::French),
            "portugues" | "pt" => Some(Self::Portuguese),
            "finlandes" | "fi" => Some(Self::Finnish),
            _ => None,
        }
    }

    /// The two-letter code books are stored with.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::Portuguese => "pt",
            Self::Finnish => "fi",
        }
    }
}

fn fold(input: &str) -> String {
    input
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_input(s).ok_or_else(|| ParseLanguageError(s.to_string()))
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::English => "English",
            Self::Spanish => "Español",
            Self::French => "Francés",
            Self::Portuguese => "Portugués",
            Self::Finnish => "Finlandés",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone)]
pub struct ValidatorLanguage {}
impl StringValidator for ValidatorLanguage {
    fn validate(&self, input: &str) -> Result<Validation, inquire::CustomUserError> {
        match Language::from_input(input) {
            Some(_) => Ok(Validation::Valid),
            None => Ok(Validation::Invalid(
                "Invalid language, try again.".into(),
            )),
        }
    }
}

impl Language {
    /// Keeps asking until the answer resolves to a known language.
    pub fn create_by_prompt(prompt: &str) -> anyhow::Result<Self> {
        let help = Self::ALL
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        let answer = inquire::Text::new(prompt)
            .with_help_message(&help)
            .with_validator(ValidatorLanguage {})
            .prompt()?;
        Ok(answer.parse::<Self>()?)
    }
}

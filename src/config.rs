use std::path::PathBuf;

use anyhow::Result;
use crossterm::style::Stylize;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::default_colors::*;

pub const DEFAULT_API_URL: &str = "https://gutendex.com/books/";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    bold:   bool,
    italic: bool,
    color:  crossterm::style::Color,
}

impl StyleConfig {
    fn style(&self, s: impl ToString) -> String {
        let mut s = s.to_string().with(self.color);
        if self.bold {
            s = s.bold();
        }
        if self.italic {
            s = s.italic();
        }
        s.to_string()
    }
}

pub trait Styleable {
    fn style(&self, c: &StyleConfig) -> String;
}

impl<T> Styleable for T
where
    T: ToString + std::fmt::Display,
{
    fn style(&self, c: &StyleConfig) -> String {
        c.style(self)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color:  COLOR_WHITE,
            bold:   false,
            italic: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub prefix:            String,
    pub suffix:            String,
    pub description:       String,
    pub separator:         String,
    pub style_prefix:      StyleConfig,
    pub style_suffix:      StyleConfig,
    pub style_description: StyleConfig,
    pub style_separator:   StyleConfig,
    pub style_content:     StyleConfig,
}

impl OutputConfig {
    fn frame(&self) -> (String, String, String) {
        let prefix = self.prefix.style(&self.style_prefix);
        let suffix = self.suffix.style(&self.style_suffix);
        let description = self.description.style(&self.style_description);
        (prefix, description, suffix)
    }

    pub fn format_str(&self, content: impl ToString) -> String {
        let (prefix, description, suffix) = self.frame();
        let content = content.to_string().style(&self.style_content);
        format!("{prefix}{description} {content}{suffix}")
    }

    pub fn format_vec<T>(&self, content: impl IntoIterator<Item = T>) -> String
    where
        T: ToString + std::fmt::Display,
    {
        let (prefix, description, suffix) = self.frame();
        let separator = self.separator.style(&self.style_separator);
        let content = content
            .into_iter()
            .map(|x| x.style(&self.style_content))
            .collect::<Vec<String>>()
            .join(&separator);
        format!("{prefix}{description} {content}{suffix}")
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix:            "[".into(),
            suffix:            "]".into(),
            description:       "".into(),
            separator:         ", ".into(),
            style_prefix:      StyleConfig::default(),
            style_suffix:      StyleConfig::default(),
            style_description: StyleConfig {
                italic: true,
                ..StyleConfig::default()
            },
            style_separator:   StyleConfig::default(),
            style_content:     StyleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_location:     PathBuf,
    pub api_url:               String,
    pub history_file:          PathBuf,
    pub output_book:           OutputConfig,
    pub output_author:         OutputConfig,
    pub output_language:       OutputConfig,
    pub output_download_count: OutputConfig,
    pub output_lifespan:       OutputConfig,
    pub output_bibliography:   OutputConfig,
    pub output_notice:         OutputConfig,
    pub output_error:          OutputConfig,
}

impl Config {
    pub fn default_as_string() -> Result<String> {
        Ok(toml::to_string(&Self::default())?)
    }

    pub fn read_config() -> Result<Self> {
        Ok(Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("GUTENSHELF_"))
            .extract()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_location:     PathBuf::from("~/.local/share/gutenshelf/catalog.db"),
            api_url:               DEFAULT_API_URL.into(),
            history_file:          PathBuf::from("~/.local/share/gutenshelf/history.txt"),
            output_book:           OutputConfig {
                prefix: "".into(),
                suffix: "".into(),
                style_content: StyleConfig {
                    color: COLOR_BOOK,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_author:         OutputConfig {
                description: "Written by:".into(),
                separator: " and ".into(),
                style_content: StyleConfig {
                    color: COLOR_AUTHOR,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_language:       OutputConfig {
                description: "Written in:".into(),
                separator: " and ".into(),
                style_content: StyleConfig {
                    color: COLOR_LANGUAGE,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_download_count: OutputConfig {
                description: "Downloads:".into(),
                style_content: StyleConfig {
                    color: COLOR_DOWNLOAD_COUNT,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_lifespan:       OutputConfig {
                description: "Lived:".into(),
                style_content: StyleConfig {
                    color: COLOR_TIMESTAMP,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_bibliography:   OutputConfig {
                description: "Books:".into(),
                style_content: StyleConfig {
                    color: COLOR_BOOK,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_notice:         OutputConfig {
                prefix: "".into(),
                suffix: "".into(),
                style_content: StyleConfig {
                    color: COLOR_DIMMED,
                    italic: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_error:          OutputConfig {
                description: "Error".into(),
                style_content: StyleConfig {
                    color: COLOR_ERROR,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
        }
    }
}

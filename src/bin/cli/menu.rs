use std::path::PathBuf;

use anyhow::Result;
use gutenshelf::{
    catalog::Catalog,
    config::{Config, Styleable},
    consolidate::ConsolidatedAuthor,
    gutendex::GutendexClient,
    store::CatalogStore,
    traits::DisplayTerminal,
    types::{book::Book, language::Language, text::Text},
};
use reedline::Signal;
use tracing::debug;

use crate::repl::Repl;

const MENU: &str = "
Choose an option by its number:
1 - Search a book by title
2 - List stored books
3 - List stored authors
4 - List authors alive in a given year
5 - List books by language
0 - Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    SearchByTitle,
    ListBooks,
    ListAuthors,
    ListAuthorsAliveIn,
    ListBooksByLanguage,
    Exit,
}

impl MenuOption {
    const ALL: [(MenuOption, &'static str, &'static str); 6] = [
        (MenuOption::SearchByTitle, "1", "search"),
        (MenuOption::ListBooks, "2", "books"),
        (MenuOption::ListAuthors, "3", "authors"),
        (MenuOption::ListAuthorsAliveIn, "4", "alive"),
        (MenuOption::ListBooksByLanguage, "5", "language"),
        (MenuOption::Exit, "0", "exit"),
    ];

    /// Accepts either the option number or its name.
    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|(_, number, name)| input == *number || input == *name)
            .map(|(option, _, _)| *option)
    }

    pub fn completions() -> Vec<String> {
        let mut names = Self::ALL
            .iter()
            .map(|(_, _, name)| name.to_string())
            .collect::<Vec<String>>();
        names.sort();
        names
    }
}

/// Everything a menu handler needs, passed explicitly instead of living in globals.
pub struct InteractionContext<S> {
    catalog: Catalog<S>,
    client:  GutendexClient,
    config:  Config,
    repl:    Option<Repl>,
}

impl<S: CatalogStore> InteractionContext<S> {
    pub fn new(catalog: Catalog<S>, client: GutendexClient, config: Config) -> Self {
        Self {
            catalog,
            client,
            config,
            repl: None,
        }
    }

    pub async fn run_menu(&mut self, history_file: PathBuf) -> Result<()> {
        self.repl = Some(Repl::new(MenuOption::completions(), history_file)?);
        loop {
            println!("{MENU}");
            let signal = match self.repl.as_mut() {
                Some(repl) => repl.read_line()?,
                None => anyhow::bail!("Line editor is not initialized"),
            };
            match signal {
                Signal::Success(buffer) => {
                    let option = match MenuOption::from_input(&buffer) {
                        Some(option) => option,
                        None => {
                            self.notice("Invalid option.");
                            continue;
                        }
                    };
                    if option == MenuOption::Exit {
                        println!("Closing the catalog. Goodbye.");
                        break;
                    }
                    if let Err(e) = self.handle(option).await {
                        self.error(&e);
                    }
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nAborted!");
                    break;
                }
            }
        }
        Ok(())
    }

    async fn handle(&self, option: MenuOption) -> Result<()> {
        debug!(?option, "menu selection");
        match option {
            MenuOption::SearchByTitle => {
                let title = Text::create_by_prompt("Which title do you want to search for?")?;
                self.search_and_store(&title.0).await
            }
            MenuOption::ListBooks => self.list_books().await,
            MenuOption::ListAuthors => self.list_authors().await,
            MenuOption::ListAuthorsAliveIn => {
                let year = inquire::CustomType::<i32>::new(
                    "In which year should the authors have been alive?",
                )
                .with_error_message("Please type a year, e.g. 1820")
                .prompt()?;
                self.list_authors_alive_in(year).await
            }
            MenuOption::ListBooksByLanguage => {
                let language =
                    Language::create_by_prompt("In which language should the books be written?")?;
                self.list_books_by_language(language).await
            }
            MenuOption::Exit => Ok(()),
        }
    }

    pub async fn search_and_store(&self, title: &str) -> Result<()> {
        let results = self.client.search(title).await?;
        let report = self.catalog.ingest(&results).await?;
        if report.is_empty() {
            self.notice("No results found.");
            return Ok(());
        }
        if report.has_duplicates() {
            self.notice(&format!(
                "{} of the results are already in the catalog and were not added again.",
                report.skipped_count()
            ));
        }
        if !report.stored.is_empty() {
            println!("Added:");
            for title in &report.stored {
                println!("  {}", title.style(&self.config.output_book.style_content));
            }
        }
        Ok(())
    }

    pub async fn list_books(&self) -> Result<()> {
        let books = self.catalog.books().await?;
        if books.is_empty() {
            self.notice("The catalog is empty.");
        }
        self.print_books(&books)
    }

    pub async fn list_authors(&self) -> Result<()> {
        let authors = self.catalog.authors().await?;
        if authors.is_empty() {
            self.notice("The catalog is empty.");
        }
        self.print_authors(&authors)
    }

    pub async fn list_authors_alive_in(&self, year: i32) -> Result<()> {
        let authors = self.catalog.authors_alive_in(year).await?;
        if authors.is_empty() {
            self.notice(&format!("No authors found for {year}."));
        }
        self.print_authors(&authors)
    }

    pub async fn list_books_by_language(&self, language: Language) -> Result<()> {
        let books = self.catalog.books_by_language(language.code()).await?;
        if books.is_empty() {
            self.notice(&format!("No books written in {language}."));
        }
        self.print_books(&books)
    }

    fn print_books(&self, books: &[Book]) -> Result<()> {
        for book in books {
            println!("{}", book.fmt_to_string(&self.config)?);
        }
        Ok(())
    }

    fn print_authors(&self, authors: &[ConsolidatedAuthor]) -> Result<()> {
        for author in authors {
            println!("{}", author.fmt_to_string(&self.config)?);
        }
        Ok(())
    }

    fn notice(&self, message: &str) {
        println!("{}", message.style(&self.config.output_notice.style_content));
    }

    pub fn error(&self, error: &anyhow::Error) {
        println!("{}", self.config.output_error.format_str(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_accepts_numbers_and_names() {
        assert_eq!(MenuOption::from_input("1"), Some(MenuOption::SearchByTitle));
        assert_eq!(MenuOption::from_input(" 5 \n"), Some(MenuOption::ListBooksByLanguage));
        assert_eq!(MenuOption::from_input("Authors"), Some(MenuOption::ListAuthors));
        assert_eq!(MenuOption::from_input("0"), Some(MenuOption::Exit));
    }

    #[test]
    fn menu_rejects_unknown_input() {
        assert_eq!(MenuOption::from_input("6"), None);
        assert_eq!(MenuOption::from_input(""), None);
        assert_eq!(MenuOption::from_input("klingon"), None);
    }
}

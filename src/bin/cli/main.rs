use std::path::{Path, PathBuf};

use anyhow::Result;
use dotenvy::{dotenv, var as envar};
use tracing_subscriber::EnvFilter;

mod command_parser;
mod menu;
mod prompt;
mod repl;

use gutenshelf::{
    catalog::Catalog, config::Config, gutendex::GutendexClient, store::SqliteStore,
    types::language::Language,
};
use menu::InteractionContext;

/// `--database`, then `DATABASE_URL` (also read from `.env`), then the config file.
fn database_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    let path = match flag {
        Some(path) => path,
        None => {
            dotenv().ok();
            match envar("DATABASE_URL").ok() {
                Some(db_url) => PathBuf::from(
                    db_url
                        .trim_start_matches("sqlite://")
                        .trim_start_matches("sqlite:"),
                ),
                None => config.database_location.clone(),
            }
        }
    };
    let path = expand(&path);
    create_parent_dir(&path)?;
    Ok(path)
}

fn expand(path: &Path) -> PathBuf {
    shellexpand::path::tilde(path).into_owned()
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = command_parser::arg_parser().get_matches();

    if let Some(("config", _)) = args.subcommand() {
        print!("{}", Config::default_as_string()?);
        return Ok(());
    }

    let config = Config::read_config()?;
    let db_path = database_path(args.get_one::<PathBuf>("database").cloned(), &config)?;
    let history_file = expand(&config.history_file);
    let store = SqliteStore::connect(&db_path).await?;
    let client = GutendexClient::new(config.api_url.clone());
    let mut ctx = InteractionContext::new(Catalog::new(store), client, config);

    match args.subcommand() {
        Some(("search", matches)) => {
            let title = matches
                .get_many::<String>("title")
                .unwrap_or_default()
                .map(String::as_str)
                .collect::<Vec<&str>>()
                .join(" ");
            ctx.search_and_store(&title).await?;
        }
        Some(("books", matches)) => match matches.get_one::<Language>("language") {
            Some(language) => ctx.list_books_by_language(*language).await?,
            None => ctx.list_books().await?,
        },
        Some(("authors", matches)) => match matches.get_one::<i32>("alive-in") {
            Some(year) => ctx.list_authors_alive_in(*year).await?,
            None => ctx.list_authors().await?,
        },
        Some(("menu", _)) | None => {
            create_parent_dir(&history_file)?;
            ctx.run_menu(history_file).await?;
        }
        Some((name, _)) => unreachable!("unhandled subcommand {}", name),
    }

    Ok(())
}

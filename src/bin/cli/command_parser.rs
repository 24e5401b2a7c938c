use std::path::PathBuf;

use clap::{value_parser, Arg, Command};
use gutenshelf::types::language::Language;

pub fn arg_parser() -> Command {
    Command::new("gutenshelf")
        .about("Personal catalog of Project Gutenberg books")
        .arg(
            Arg::new("database")
                .long("database")
                .value_name("PATH")
                .help("Catalog database file, overrides DATABASE_URL and the config file")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(Command::new("menu").about("Launch the interactive menu (default)"))
        .subcommand(
            Command::new("search")
                .about("Search Gutendex by title and add the results to the catalog")
                .arg(Arg::new("title").required(true).num_args(1..)),
        )
        .subcommand(
            Command::new("books").about("List stored books").arg(
                Arg::new("language")
                    .long("language")
                    .short('l')
                    .value_name("LANGUAGE")
                    .help("Only books written in this language, e.g. `es` or `español`")
                    .value_parser(|s: &str| s.parse::<Language>()),
            ),
        )
        .subcommand(
            Command::new("authors").about("List stored authors").arg(
                Arg::new("alive-in")
                    .long("alive-in")
                    .value_name("YEAR")
                    .help("Only authors alive during this year")
                    .allow_negative_numbers(true)
                    .value_parser(value_parser!(i32)),
            ),
        )
        .subcommand(Command::new("config").about("Print the default configuration"))
}

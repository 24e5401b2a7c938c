pub mod text;
pub mod uuid;

pub mod author;
pub mod book;
pub mod junction_tables;
pub mod language;

pub use junction_tables::{book_author, book_language};

//! Personal catalog of Project Gutenberg books.
//!
//! Search results from the Gutendex API are normalized ([`ingest`]), stored once per work
//! ([`store`]) and queried through [`catalog::Catalog`].
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod config;
pub mod consolidate;
pub mod default_colors;
pub mod error;
pub mod gutendex;
pub mod ingest;
pub mod store;
pub mod traits;
pub mod types;

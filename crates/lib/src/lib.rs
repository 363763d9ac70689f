//! # booketl
//!
//! The core of a scheduled extract-transform-load job for book metadata: the
//! normalized record type, the error taxonomy, the `Extractor` and `BookStore`
//! seams, a Turso-backed store, the loader, and the sequential pipeline that
//! ties them together.

pub mod constants;
pub mod errors;
pub mod extract;
pub mod load;
pub mod pipeline;
pub mod providers;
pub mod schedule;
pub mod types;

pub use errors::EtlError;
pub use extract::Extractor;
pub use load::load_books;
pub use pipeline::Pipeline;
pub use providers::db::{sqlite::SqliteBookStore, storage::BookStore};
pub use schedule::{run_scheduled, RetryPolicy, Schedule};
pub use types::{BookQuery, BookRecord, LoadResult, RunSummary};

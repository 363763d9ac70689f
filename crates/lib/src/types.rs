//! # Core Types
//!
//! The flat record produced by extraction and consumed by the loader, the static
//! search query, and the summaries returned by each stage.

use crate::constants::{DEFAULT_AUTHOR, DEFAULT_PRINT_TYPE, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use turso::Value as TursoValue;

/// A single normalized book, ready to be written as one row.
///
/// Multi-valued source fields (`authors`, `categories`) are already flattened into
/// a comma-separated string, which is empty rather than absent when the source had
/// no values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: Option<String>,
    pub authors: String,
    pub publisher: Option<String>,
    #[serde(rename = "publishedDate")]
    pub published_date: Option<String>,
    #[serde(rename = "publishedYear")]
    pub published_year: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "pageCount")]
    pub page_count: Option<i64>,
    pub categories: String,
    pub language: Option<String>,
    pub isbn_13: Option<String>,
    #[serde(rename = "infoLink")]
    pub info_link: Option<String>,
}

impl BookRecord {
    /// Returns the values bound to the insert statement, in its column order:
    /// title, authors, publisher, published_date, description, page_count,
    /// categories, language, isbn_13, info_link, published_year.
    ///
    /// Absent optional fields are bound as `NULL` so every insert carries all
    /// eleven columns.
    pub fn insert_params(&self) -> Vec<TursoValue> {
        vec![
            text_or_null(&self.title),
            TursoValue::Text(self.authors.clone()),
            text_or_null(&self.publisher),
            text_or_null(&self.published_date),
            text_or_null(&self.description),
            self.page_count.map_or(TursoValue::Null, TursoValue::Integer),
            TursoValue::Text(self.categories.clone()),
            text_or_null(&self.language),
            text_or_null(&self.isbn_13),
            text_or_null(&self.info_link),
            text_or_null(&self.published_year),
        ]
    }
}

fn text_or_null(value: &Option<String>) -> TursoValue {
    match value {
        Some(s) => TursoValue::Text(s.clone()),
        None => TursoValue::Null,
    }
}

/// The fixed search issued on every run.
///
/// Fields missing from a deserialized query take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookQuery {
    pub author: String,
    pub max_results: u32,
    pub print_type: String,
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            max_results: MAX_PAGE_SIZE,
            print_type: DEFAULT_PRINT_TYPE.to_string(),
        }
    }
}

impl BookQuery {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            ..Default::default()
        }
    }

    /// The value of the `q` parameter, restricting matches to the author field.
    pub fn q(&self) -> String {
        format!("inauthor:\"{}\"", self.author)
    }

    /// `max_results`, clamped to the single page the API will serve.
    pub fn page_size(&self) -> u32 {
        self.max_results.clamp(1, MAX_PAGE_SIZE)
    }
}

/// What the loader wrote during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResult {
    pub rows_inserted: usize,
    /// Surrogate ids assigned by the store, in insertion order.
    pub row_ids: Vec<i64>,
}

/// A summary of one complete extract-and-load run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the records came from (e.g., the request URL).
    pub source: String,
    pub extracted: usize,
    pub rows_inserted: usize,
}

//! # SQLite Specific SQL Queries
//!
//! This module centralizes the SQL used by the SQLite provider, so the
//! column order the record binds against is defined in exactly one place.

/// Creates the destination table. `id` is the surrogate key assigned on insert.
pub const CREATE_BOOKS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY,
        title TEXT,
        authors TEXT,
        publisher TEXT,
        published_date TEXT,
        description TEXT,
        page_count INTEGER,
        categories TEXT,
        language TEXT,
        isbn_13 TEXT,
        info_link TEXT,
        published_year TEXT
    );
";

/// All statements needed to provision a fresh database.
pub const ALL_TABLE_CREATION_SQL: &[&str] = &[CREATE_BOOKS_TABLE];

/// The columns bound by `INSERT_BOOK`, in bind order.
pub const INSERT_COLUMNS: [&str; 11] = [
    "title",
    "authors",
    "publisher",
    "published_date",
    "description",
    "page_count",
    "categories",
    "language",
    "isbn_13",
    "info_link",
    "published_year",
];

/// Appends one book and returns its new `id`. Expects the eleven parameters in
/// `INSERT_COLUMNS` order.
pub const INSERT_BOOK: &str = "
    INSERT INTO books (
        title, authors, publisher, published_date, description,
        page_count, categories, language, isbn_13, info_link, published_year
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
    RETURNING id
";

pub const COUNT_BOOKS: &str = "SELECT COUNT(*) FROM books";

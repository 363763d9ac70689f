//! # Shared Constants
//!
//! This module provides a centralized location for constants that are shared across
//! the crates of the `booketl` workspace, so that endpoint URLs, timeouts and
//! scheduling defaults are not repeated as magic strings.

/// The default path for the destination SQLite database.
pub const DEFAULT_DB_FILE: &str = "db/books.db";

/// The Google Books volumes search endpoint.
pub const GOOGLE_BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// The largest page the volumes endpoint will return in a single response.
pub const MAX_PAGE_SIZE: u32 = 40;

/// The author searched for when no query is configured.
pub const DEFAULT_AUTHOR: &str = "Stephen King";

/// Restricts results to books (as opposed to magazines).
pub const DEFAULT_PRINT_TYPE: &str = "books";

/// The bound on the single outbound request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// One run per day.
pub const DEFAULT_SCHEDULE_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// A failed run is retried once.
pub const DEFAULT_RETRIES: u32 = 1;

/// Five minutes between a failed run and its retry.
pub const DEFAULT_RETRY_BACKOFF_SECS: u64 = 5 * 60;

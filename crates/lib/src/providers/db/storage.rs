use crate::{errors::EtlError, types::BookRecord};
use async_trait::async_trait;
use std::fmt::Debug;

/// A trait for the destination store of a run.
///
/// It covers the two things the pipeline asks of a store: making sure the
/// destination table exists, and appending one record as one new row.
#[async_trait]
pub trait BookStore: Send + Sync + Debug {
    /// Returns the name of the storage provider (e.g., "SQLite").
    fn name(&self) -> &str;

    /// Creates the destination table if it does not exist yet.
    ///
    /// This must succeed when the table is already there, since it runs on every
    /// scheduled invocation.
    async fn ensure_table(&self) -> Result<(), EtlError>;

    /// Appends one record as a new row and returns its surrogate id.
    ///
    /// There is no conflict detection: inserting the same record twice yields two rows.
    async fn insert_book(&self, record: &BookRecord) -> Result<i64, EtlError>;
}

//! # Loading
//!
//! Appends extracted records to the destination store, one independent insert per
//! record, in input order.

use crate::{
    errors::EtlError,
    providers::db::storage::BookStore,
    types::{BookRecord, LoadResult},
};
use tracing::{error, info};

/// Writes every record as a new row.
///
/// An empty input is rejected with `EtlError::NoData` before any write is issued.
/// The first failing insert halts the load and is returned as
/// `EtlError::Persistence`; rows written earlier in the same call are kept.
pub async fn load_books(
    store: &dyn BookStore,
    records: &[BookRecord],
) -> Result<LoadResult, EtlError> {
    if records.is_empty() {
        return Err(EtlError::NoData);
    }

    let mut row_ids = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let id = store.insert_book(record).await.map_err(|e| {
            error!(
                index,
                inserted = row_ids.len(),
                "Insert into {} failed; halting load.",
                store.name()
            );
            EtlError::Persistence(format!(
                "insert of record {} of {} failed after {} rows were written: {e}",
                index + 1,
                records.len(),
                row_ids.len()
            ))
        })?;
        row_ids.push(id);
    }

    info!("Loaded {} book rows into {}.", row_ids.len(), store.name());

    Ok(LoadResult {
        rows_inserted: row_ids.len(),
        row_ids,
    })
}

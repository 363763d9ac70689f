//! # Pipeline
//!
//! Composes the stages of a run into one explicit, strictly sequential object:
//! extract, then provision the destination table, then load. The extracted
//! records are handed to the loader as a plain return value; nothing is shared
//! between runs.

use crate::{
    errors::EtlError,
    extract::Extractor,
    load::load_books,
    providers::db::storage::BookStore,
    schedule::RetryPolicy,
    types::RunSummary,
};
use tracing::{info, warn};

pub struct Pipeline {
    extractor: Box<dyn Extractor>,
    store: Box<dyn BookStore>,
}

impl Pipeline {
    pub fn new(extractor: Box<dyn Extractor>, store: Box<dyn BookStore>) -> Self {
        Self { extractor, store }
    }

    /// Executes one run.
    ///
    /// Any stage failure aborts the run and is returned unchanged. A failure during
    /// loading leaves the rows already written in place.
    pub async fn run(&self) -> Result<RunSummary, EtlError> {
        let source = self.extractor.source();
        info!("[pipeline] Extracting from {source}.");
        let records = self.extractor.extract().await?;
        info!("[pipeline] Extracted {} records.", records.len());

        self.store.ensure_table().await?;

        let loaded = load_books(self.store.as_ref(), &records).await?;

        Ok(RunSummary {
            source,
            extracted: records.len(),
            rows_inserted: loaded.rows_inserted,
        })
    }

    /// Executes a run, re-running the whole pipeline after a failure as the
    /// policy allows. Returns the error of the final attempt.
    ///
    /// A retry after a partial load re-inserts rows written by the failed attempt.
    pub async fn run_with_retry(&self, policy: &RetryPolicy) -> Result<RunSummary, EtlError> {
        let mut attempt = 0;
        loop {
            match self.run().await {
                Ok(summary) => return Ok(summary),
                Err(e) if attempt < policy.retries => {
                    attempt += 1;
                    warn!(
                        attempt,
                        retryable = e.is_retryable(),
                        "[pipeline] Run failed: {e}. Retrying in {:?}.",
                        policy.backoff
                    );
                    tokio::time::sleep(policy.backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

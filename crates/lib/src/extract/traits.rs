use crate::{errors::EtlError, types::BookRecord};
use async_trait::async_trait;

/// The contract for the first stage of a run.
///
/// An extractor owns its (static) query and turns one call to its upstream source
/// into an ordered list of normalized records. It keeps no state between runs.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// A human-readable identifier for the upstream source, used in logs and summaries.
    fn source(&self) -> String;

    /// Fetches and normalizes the records for this run.
    ///
    /// The returned records match the upstream items 1:1 and in the same order.
    /// An upstream response with no items is an empty vector, not an error.
    async fn extract(&self) -> Result<Vec<BookRecord>, EtlError>;
}

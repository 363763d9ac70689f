use thiserror::Error;

/// The error taxonomy shared by every stage of the pipeline.
///
/// Each stage maps its underlying failure (HTTP client, JSON, database driver)
/// into one of these variants, so the orchestration layer can report a failed
/// run uniformly regardless of where it broke.
#[derive(Error, Debug)]
pub enum EtlError {
    /// The book API did not answer in time, or the connection failed.
    #[error("Network request to the book API failed: {0}")]
    TransientNetwork(String),

    /// The book API answered with a non-success status.
    #[error("Book API returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The response body was not the JSON shape we can read.
    #[error("Failed to parse the book API response: {0}")]
    Parse(String),

    /// The extraction stage produced nothing for the loader.
    #[error("No book data returned from the extraction stage")]
    NoData,

    /// A write to the destination store failed.
    #[error("A database operation failed: {0}")]
    Persistence(String),
}

impl EtlError {
    /// Classifies a `reqwest` failure into the taxonomy.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            EtlError::TransientNetwork(err.to_string())
        } else if let Some(status) = err.status() {
            EtlError::Upstream {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_decode() {
            EtlError::Parse(err.to_string())
        } else {
            EtlError::TransientNetwork(err.to_string())
        }
    }

    /// Whether a later attempt has a reasonable chance of succeeding.
    pub fn is_retryable(&self) -> bool {
        match self {
            EtlError::TransientNetwork(_) => true,
            EtlError::Upstream { status, .. } => *status == 429 || *status >= 500,
            EtlError::Parse(_) | EtlError::NoData | EtlError::Persistence(_) => false,
        }
    }
}

impl From<turso::Error> for EtlError {
    fn from(err: turso::Error) -> Self {
        EtlError::Persistence(err.to_string())
    }
}

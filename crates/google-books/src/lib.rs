//! # `booketl-google-books`: Google Books Extraction Plugin
//!
//! This crate fetches one page of volumes from the Google Books API for a fixed
//! author query and normalizes each volume into a `BookRecord`. It implements the
//! `Extractor` trait from the core `booketl` library.

mod volume;

pub use volume::{normalize_volume, parse_volumes};

use async_trait::async_trait;
use booketl::{constants::GOOGLE_BOOKS_API_URL, BookQuery, BookRecord, EtlError, Extractor};
use std::time::Duration;
use tracing::info;

/// The `Extractor` implementation for the Google Books volumes endpoint.
pub struct GoogleBooksExtractor {
    client: reqwest::Client,
    base_url: String,
    query: BookQuery,
}

impl GoogleBooksExtractor {
    /// Creates an extractor against the public endpoint.
    pub fn new(query: BookQuery, timeout: Duration) -> Result<Self, EtlError> {
        Self::with_base_url(GOOGLE_BOOKS_API_URL, query, timeout)
    }

    /// Creates an extractor against a different endpoint (e.g., a mock server).
    pub fn with_base_url(
        base_url: &str,
        query: BookQuery,
        timeout: Duration,
    ) -> Result<Self, EtlError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(EtlError::from_reqwest)?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            query,
        })
    }

    pub fn query(&self) -> &BookQuery {
        &self.query
    }
}

#[async_trait]
impl Extractor for GoogleBooksExtractor {
    fn source(&self) -> String {
        format!("{} ({})", self.base_url, self.query.q())
    }

    /// Issues a single GET for one page of results and normalizes every item.
    ///
    /// No further pages are requested.
    async fn extract(&self) -> Result<Vec<BookRecord>, EtlError> {
        info!("Fetching volumes from: {}", self.source());
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", self.query.q()),
                ("maxResults", self.query.page_size().to_string()),
                ("printType", self.query.print_type.clone()),
            ])
            .send()
            .await
            .map_err(EtlError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EtlError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(EtlError::from_reqwest)?;
        let records = parse_volumes(&body)?;
        info!("Normalized {} volumes.", records.len());
        Ok(records)
    }
}

use anyhow::Result;
use async_trait::async_trait;
use booketl::providers::db::sqlite::sql;
use booketl::{BookRecord, BookStore, EtlError, Extractor};
use std::sync::{Arc, Mutex};
use turso::Database;

// --- Test Setup ---

/// A helper struct to manage database creation for each test.
pub struct TestSetup {
    pub db: Database,
}

impl TestSetup {
    /// Creates a new, isolated in-memory database and provisions the books table.
    pub async fn new() -> Result<Self> {
        let db = turso::Builder::new_local(":memory:").build().await?;
        let conn = db.connect()?;

        for statement in sql::ALL_TABLE_CREATION_SQL {
            conn.execute(statement, ()).await?;
        }

        Ok(Self { db })
    }

    /// Creates a new in-memory database with no tables at all.
    pub async fn empty() -> Result<Self> {
        let db = turso::Builder::new_local(":memory:").build().await?;
        Ok(Self { db })
    }
}

/// Builds a record with the given title and otherwise empty fields.
pub fn book(title: &str) -> BookRecord {
    BookRecord {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

// --- Mock Store ---

/// An in-memory `BookStore` that records every call for assertion.
///
/// Optionally fails the insert at a given zero-based position (counted across
/// all calls), which lets tests exercise partial loads.
#[derive(Clone, Debug, Default)]
pub struct RecordingStore {
    inserted: Arc<Mutex<Vec<BookRecord>>>,
    ensure_table_calls: Arc<Mutex<usize>>,
    fail_insert_at: Option<usize>,
    attempts: Arc<Mutex<usize>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `n`-th insert attempt (zero-based) fails.
    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_insert_at: Some(n),
            ..Default::default()
        }
    }

    /// Retrieves the records that were successfully inserted, in order.
    pub fn inserted(&self) -> Vec<BookRecord> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn ensure_table_calls(&self) -> usize {
        *self.ensure_table_calls.lock().unwrap()
    }

    /// The number of insert calls made, including the failed one.
    pub fn insert_attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl BookStore for RecordingStore {
    fn name(&self) -> &str {
        "Recording"
    }

    async fn ensure_table(&self) -> Result<(), EtlError> {
        *self.ensure_table_calls.lock().unwrap() += 1;
        Ok(())
    }

    async fn insert_book(&self, record: &BookRecord) -> Result<i64, EtlError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts - 1
        };
        if self.fail_insert_at == Some(attempt) {
            return Err(EtlError::Persistence("connection lost".to_string()));
        }
        let mut inserted = self.inserted.lock().unwrap();
        inserted.push(record.clone());
        Ok(inserted.len() as i64)
    }
}

// --- Mock Extractor ---

/// An `Extractor` that replays pre-programmed outcomes, one per call.
///
/// Once the programmed outcomes run out, the last one is repeated.
#[derive(Clone)]
pub struct StaticExtractor {
    outcomes: Arc<Mutex<Vec<Result<Vec<BookRecord>, String>>>>,
    calls: Arc<Mutex<usize>>,
}

impl StaticExtractor {
    /// Always returns the given records.
    pub fn returning(records: Vec<BookRecord>) -> Self {
        Self::with_outcomes(vec![Ok(records)])
    }

    /// Returns the outcomes in order. An `Err(message)` becomes a transient
    /// network failure.
    pub fn with_outcomes(outcomes: Vec<Result<Vec<BookRecord>, String>>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into_iter().rev().collect())),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Extractor for StaticExtractor {
    fn source(&self) -> String {
        "static".to_string()
    }

    async fn extract(&self) -> Result<Vec<BookRecord>, EtlError> {
        *self.calls.lock().unwrap() += 1;
        let mut outcomes = self.outcomes.lock().unwrap();
        let outcome = if outcomes.len() > 1 {
            outcomes.pop()
        } else {
            outcomes.last().cloned()
        };
        match outcome {
            Some(Ok(records)) => Ok(records),
            Some(Err(message)) => Err(EtlError::TransientNetwork(message)),
            None => Ok(Vec::new()),
        }
    }
}

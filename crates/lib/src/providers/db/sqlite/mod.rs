use crate::{errors::EtlError, providers::db::storage::BookStore, types::BookRecord};
use async_trait::async_trait;
use std::fmt::{self, Debug};
use tracing::{debug, info};
use turso::{Database, Value as TursoValue};

pub mod sql;

/// A destination store backed by a local SQLite database using Turso.
///
/// When cloned, it shares the same underlying database, so an in-memory database
/// created once can be handed to several components (e.g., in tests).
#[derive(Clone)]
pub struct SqliteBookStore {
    /// The Turso database instance. It's cloneable and thread-safe.
    pub db: Database,
}

impl SqliteBookStore {
    /// Opens (or creates) the database at `db_path`. Use ":memory:" for an isolated
    /// in-memory database.
    pub async fn new(db_path: &str) -> Result<Self, EtlError> {
        let db = turso::Builder::new_local(db_path).build().await?;
        info!("Opened book store at '{db_path}'.");
        Ok(Self { db })
    }

    /// Wraps an already-open database.
    pub fn from_database(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    /// The number of rows accumulated in the destination table across all runs.
    pub async fn count_books(&self) -> Result<i64, EtlError> {
        let conn = self.db.connect()?;
        let mut rows = conn.query(sql::COUNT_BOOKS, ()).await?;
        match rows.next().await? {
            Some(row) => Ok(row.get(0)?),
            None => Ok(0),
        }
    }
}

impl Debug for SqliteBookStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteBookStore").finish_non_exhaustive()
    }
}

impl AsRef<Database> for SqliteBookStore {
    fn as_ref(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl BookStore for SqliteBookStore {
    fn name(&self) -> &str {
        "SQLite"
    }

    async fn ensure_table(&self) -> Result<(), EtlError> {
        let conn = self.db.connect()?;
        for statement in sql::ALL_TABLE_CREATION_SQL {
            conn.execute(statement, ()).await?;
        }
        debug!("Destination table is provisioned.");
        Ok(())
    }

    async fn insert_book(&self, record: &BookRecord) -> Result<i64, EtlError> {
        let conn = self.db.connect()?;
        let mut rows = conn.query(sql::INSERT_BOOK, record.insert_params()).await?;
        match rows.next().await? {
            Some(row) => match row.get_value(0)? {
                TursoValue::Integer(id) => {
                    debug!(id, title = ?record.title, "Inserted book row.");
                    Ok(id)
                }
                other => Err(EtlError::Persistence(format!(
                    "insert returned a non-integer id: {other:?}"
                ))),
            },
            None => Err(EtlError::Persistence("insert returned no id".to_string())),
        }
    }
}

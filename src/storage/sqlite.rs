use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::{PersistenceGateway, StorageError};

const KV_STORE_DDL: &str = include_str!("../sql/schema/sqlite/00_kv_store.sql");

const UPSERT_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at;";
const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1;";
const SELECT_UPDATED_SQL: &str = "SELECT updated_at FROM kv_store WHERE key = ?1;";

/// Gateway backed by a single `kv_store` table in a SQLite file. Blocking
/// `rusqlite` calls run on tokio's blocking pool.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and make sure the table exists.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the file cannot be opened or the schema
    /// cannot be applied.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::init(Connection::open(path)?)
    }

    /// # Errors
    ///
    /// Returns a `StorageError` if the schema cannot be applied.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(KV_STORE_DDL)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, rusqlite::Error> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| StorageError::new("sqlite connection lock poisoned"))?;
            f(&guard).map_err(StorageError::from)
        })
        .await
        .map_err(|e| StorageError::new(format!("sqlite task failed: {e}")))?
    }

    /// When `key` was last written, if ever.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the query fails or the stored timestamp is
    /// not RFC 3339.
    pub async fn last_updated(&self, key: &str) -> Result<Option<DateTime<Utc>>, StorageError> {
        let key = key.to_string();
        let raw: Option<String> = self
            .with_conn(move |conn| {
                conn.query_row(SELECT_UPDATED_SQL, params![key], |row| row.get(0))
                    .optional()
            })
            .await?;

        raw.map(|ts| {
            DateTime::parse_from_rfc3339(&ts)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| StorageError::new(format!("bad updated_at '{ts}': {e}")))
        })
        .transpose()
    }
}

#[async_trait]
impl PersistenceGateway for SqliteStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let key = key.to_string();
        self.with_conn(move |conn| {
            conn.query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
                .optional()
        })
        .await
    }

    async fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        let key = key.to_string();
        let blob = blob.to_string();
        let updated_at = Utc::now().to_rfc3339();
        self.with_conn(move |conn| {
            conn.execute(UPSERT_SQL, params![key, blob, updated_at])
                .map(|_| ())
        })
        .await
    }
}

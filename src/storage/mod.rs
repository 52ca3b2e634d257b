pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt;

use crate::model::{HoleMap, PlayerStats};

/// Key of the per-hole score map blob.
pub const SCORES_KEY: &str = "golfScores";
/// Key of the last computed statistics snapshot.
pub const STATS_KEY: &str = "playerStats";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(value.to_string())
    }
}

/// Named-blob persistence. Blobs are JSON text; `load` returns `None` for a
/// key that was never saved.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn save(&self, key: &str, blob: &str) -> Result<(), StorageError>;
}

/// # Errors
///
/// Returns a `StorageError` if the gateway fails or the blob does not parse
/// as `T`.
pub async fn load_json<T, S>(storage: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: PersistenceGateway + ?Sized,
{
    let Some(blob) = storage.load(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&blob)
        .map(Some)
        .map_err(|e| StorageError::new(format!("malformed {key} blob: {e}")))
}

/// # Errors
///
/// Returns a `StorageError` if serialization or the gateway write fails.
pub async fn save_json<T, S>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized + Sync,
    S: PersistenceGateway + ?Sized,
{
    let payload = serde_json::to_string(value).map_err(|e| StorageError::new(e.to_string()))?;
    storage.save(key, &payload).await
}

/// # Errors
///
/// See [`load_json`].
pub async fn load_holes<S>(storage: &S) -> Result<Option<HoleMap>, StorageError>
where
    S: PersistenceGateway + ?Sized,
{
    load_json(storage, SCORES_KEY).await
}

/// # Errors
///
/// See [`save_json`].
pub async fn save_holes<S>(storage: &S, holes: &HoleMap) -> Result<(), StorageError>
where
    S: PersistenceGateway + ?Sized,
{
    save_json(storage, SCORES_KEY, holes).await
}

/// # Errors
///
/// See [`load_json`].
pub async fn load_player_stats<S>(storage: &S) -> Result<Option<PlayerStats>, StorageError>
where
    S: PersistenceGateway + ?Sized,
{
    load_json(storage, STATS_KEY).await
}

/// # Errors
///
/// See [`save_json`].
pub async fn save_player_stats<S>(storage: &S, stats: &PlayerStats) -> Result<(), StorageError>
where
    S: PersistenceGateway + ?Sized,
{
    save_json(storage, STATS_KEY, stats).await
}

use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScorecardError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("hole {0} is not on the course (expected 1-18)")]
    InvalidHole(u8),
    #[error("course error: {0}")]
    Course(String),
    #[error("{0}")]
    Other(String),
}

impl From<StorageError> for ScorecardError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ScorecardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for ScorecardError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ScorecardError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<String> for ScorecardError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for ScorecardError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}

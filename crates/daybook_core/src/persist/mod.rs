//! Namespaced state persistence.
//!
//! # Responsibility
//! - Define the storage contract stores write their envelopes through.
//! - Provide the SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - One record per namespace; writes replace the whole record.
//! - Envelopes are JSON `{"state": ...}` without a version field.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod envelope;
pub mod storage;

pub use envelope::{decode_state, encode_state, namespace_key, StateEnvelope};
pub use storage::{MemoryStateStorage, SqliteStateStorage, StateStorage};

pub type PersistResult<T> = Result<T, PersistError>;

#[derive(Debug)]
pub enum PersistError {
    Db(DbError),
    Serialization(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "invalid state envelope: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

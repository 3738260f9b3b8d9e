//! Storage backends for state envelopes.
//!
//! # Invariants
//! - `save` is an upsert keyed by namespace.
//! - `load` of an unknown namespace is `Ok(None)`, not an error.

use super::PersistResult;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key-value contract standing in for device-local storage.
pub trait StateStorage {
    fn load(&self, namespace: &str) -> PersistResult<Option<String>>;
    fn save(&self, namespace: &str, payload: &str) -> PersistResult<()>;
    fn remove(&self, namespace: &str) -> PersistResult<()>;
}

/// SQLite-backed storage over the `store_records` table.
///
/// Cheap to copy, so several stores can share one migrated connection.
#[derive(Clone, Copy)]
pub struct SqliteStateStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateStorage<'conn> {
    /// Wraps a connection returned by `open_db` or `open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateStorage for SqliteStateStorage<'_> {
    fn load(&self, namespace: &str) -> PersistResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM store_records WHERE namespace = ?1;",
                [namespace],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn save(&self, namespace: &str, payload: &str) -> PersistResult<()> {
        self.conn.execute(
            "INSERT INTO store_records (namespace, payload, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(namespace) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![namespace, payload],
        )?;
        Ok(())
    }

    fn remove(&self, namespace: &str) -> PersistResult<()> {
        self.conn.execute(
            "DELETE FROM store_records WHERE namespace = ?1;",
            [namespace],
        )?;
        Ok(())
    }
}

/// Process-local storage; clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStorage {
    records: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl StateStorage for MemoryStateStorage {
    fn load(&self, namespace: &str) -> PersistResult<Option<String>> {
        Ok(self.records.borrow().get(namespace).cloned())
    }

    fn save(&self, namespace: &str, payload: &str) -> PersistResult<()> {
        self.records
            .borrow_mut()
            .insert(namespace.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, namespace: &str) -> PersistResult<()> {
        self.records.borrow_mut().remove(namespace);
        Ok(())
    }
}

impl<T: StateStorage + ?Sized> StateStorage for &T {
    fn load(&self, namespace: &str) -> PersistResult<Option<String>> {
        (**self).load(namespace)
    }

    fn save(&self, namespace: &str, payload: &str) -> PersistResult<()> {
        (**self).save(namespace, payload)
    }

    fn remove(&self, namespace: &str) -> PersistResult<()> {
        (**self).remove(namespace)
    }
}

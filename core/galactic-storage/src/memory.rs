//! In-memory entity store.

use crate::error::{StorageError, StorageResult};
use crate::store::EntityStore;
use galactic_model::{EntityId, Record};
use rand::seq::SliceRandom;
use std::sync::RwLock;

/// [`EntityStore`] over a vector kept in insertion order.
///
/// Insertion order plays the role of SQLite's rowid: records with equal
/// names keep the order they were inserted in.
pub struct MemoryStore<T> {
    rows: RwLock<Vec<T>>,
}

impl<T: Record> MemoryStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rows(Vec::new())
    }

    /// Creates a store holding the given rows.
    #[must_use]
    pub fn from_rows(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Appends a row.
    pub fn insert(&self, row: T) -> StorageResult<()> {
        self.rows
            .write()
            .map_err(|_| StorageError::LockPoisoned)?
            .push(row);
        Ok(())
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> EntityStore<T> for MemoryStore<T> {
    fn fetch_page(&self, offset: u64, limit: u64) -> StorageResult<(Vec<T>, u64)> {
        let rows = self.rows.read().map_err(|_| StorageError::LockPoisoned)?;
        let mut sorted: Vec<&T> = rows.iter().collect();
        // Stable sort keeps insertion order among equal names.
        sorted.sort_by(|a, b| a.name().cmp(b.name()));

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let page = sorted
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        Ok((page, rows.len() as u64))
    }

    fn fetch_by_id(&self, id: &EntityId) -> StorageResult<Option<T>> {
        let rows = self.rows.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(rows.iter().find(|row| row.id() == id).cloned())
    }

    fn fetch_random(&self) -> StorageResult<Option<T>> {
        let rows = self.rows.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(rows.choose(&mut rand::thread_rng()).cloned())
    }

    fn count(&self) -> StorageResult<u64> {
        let rows = self.rows.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(rows.len() as u64)
    }
}

//! Record repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Keep one entity kind's records in insertion order.
//! - Enforce key uniqueness on create.
//!
//! # Invariants
//! - `list` returns records in insertion order; newly created records are
//!   appended.
//! - Writers hold the lock for the whole read-modify-write.

use crate::model::record::Entity;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A record with the same key already exists.
    DuplicateKey {
        resource: &'static str,
        key: String,
    },
    /// A writer panicked while holding the storage lock.
    Poisoned(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey { resource, key } => {
                write!(f, "{resource} record `{key}` already exists")
            }
            Self::Poisoned(resource) => write!(f, "{resource} storage lock is poisoned"),
        }
    }
}

impl Error for RepoError {}

/// Storage contract for one entity kind.
pub trait RecordRepository<E: Entity>: Send + Sync {
    /// Returns every stored record in insertion order.
    fn list(&self) -> RepoResult<Vec<E>>;
    fn get(&self, key: &str) -> RepoResult<Option<E>>;
    /// Appends a new record; rejects an existing key.
    fn create(&self, record: E) -> RepoResult<E>;
    /// Replaces the record with the same key. Returns `None` when missing.
    fn update(&self, record: E) -> RepoResult<Option<E>>;
    /// Removes one record. Returns whether it existed.
    fn delete(&self, key: &str) -> RepoResult<bool>;
    /// Removes every listed key and returns how many existed.
    fn delete_many(&self, keys: &[String]) -> RepoResult<usize>;
}

/// Process-memory repository used by mock mode and tests.
#[derive(Debug)]
pub struct InMemoryRepository<E: Entity> {
    records: RwLock<Vec<E>>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Creates a repository pre-populated with `records`.
    ///
    /// Later duplicates of a key are dropped so the uniqueness invariant
    /// holds from the start.
    pub fn seeded(records: Vec<E>) -> Self {
        let mut unique: Vec<E> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|existing| existing.key() == record.key()) {
                warn!(
                    "event=repo_seed module=repo status=skipped resource={} key={} reason=duplicate_key",
                    E::RESOURCE,
                    record.key()
                );
                continue;
            }
            unique.push(record);
        }
        debug!(
            "event=repo_seed module=repo status=ok resource={} count={}",
            E::RESOURCE,
            unique.len()
        );
        Self {
            records: RwLock::new(unique),
        }
    }

    pub fn len(&self) -> RepoResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> RepoResult<RwLockReadGuard<'_, Vec<E>>> {
        self.records
            .read()
            .map_err(|_| RepoError::Poisoned(E::RESOURCE))
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, Vec<E>>> {
        self.records
            .write()
            .map_err(|_| RepoError::Poisoned(E::RESOURCE))
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> RecordRepository<E> for InMemoryRepository<E> {
    fn list(&self) -> RepoResult<Vec<E>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, key: &str) -> RepoResult<Option<E>> {
        Ok(self
            .read()?
            .iter()
            .find(|record| record.key() == key)
            .cloned())
    }

    fn create(&self, record: E) -> RepoResult<E> {
        let mut records = self.write()?;
        if records.iter().any(|existing| existing.key() == record.key()) {
            return Err(RepoError::DuplicateKey {
                resource: E::RESOURCE,
                key: record.key().to_string(),
            });
        }
        records.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: E) -> RepoResult<Option<E>> {
        let mut records = self.write()?;
        match records
            .iter_mut()
            .find(|existing| existing.key() == record.key())
        {
            Some(slot) => {
                *slot = record.clone();
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, key: &str) -> RepoResult<bool> {
        let mut records = self.write()?;
        let before = records.len();
        records.retain(|record| record.key() != key);
        Ok(records.len() != before)
    }

    fn delete_many(&self, keys: &[String]) -> RepoResult<usize> {
        let mut records = self.write()?;
        let before = records.len();
        records.retain(|record| !keys.iter().any(|key| key == record.key()));
        Ok(before - records.len())
    }
}

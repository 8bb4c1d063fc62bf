use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use taut_core::error::{StoreError, StoreResult};
use taut_core::fingerprint::Fingerprint;
use taut_core::shortcode::ShortCode;
use taut_core::store::{IndexReader, IndexStore, IndexWriter};

#[derive(Debug, Default)]
struct Tables {
    forward: HashMap<String, String>,
    reverse: HashMap<u64, String>,
}

/// In-process index for tests and local development.
///
/// Mirrors the persistent backend's concurrency discipline: a writer holds
/// the write lock for its whole lifetime, so write transactions are
/// mutually exclusive and readers see consistent snapshots. Rollback of an
/// uncommitted writer is not simulated.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of forward entries. Intended for assertions in tests.
    pub fn forward_len(&self) -> StoreResult<usize> {
        Ok(self.tables.read().map_err(poisoned)?.forward.len())
    }

    /// Number of reverse entries. Intended for assertions in tests.
    pub fn reverse_len(&self) -> StoreResult<usize> {
        Ok(self.tables.read().map_err(poisoned)?.reverse.len())
    }
}

impl IndexStore for MemoryStore {
    type Writer<'a>
        = MemoryWriter<'a>
    where
        Self: 'a;
    type Reader<'a>
        = MemoryReader<'a>
    where
        Self: 'a;

    fn begin_write(&self) -> StoreResult<MemoryWriter<'_>> {
        let tables = self.tables.write().map_err(poisoned)?;
        Ok(MemoryWriter { tables })
    }

    fn begin_read(&self) -> StoreResult<MemoryReader<'_>> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(MemoryReader { tables })
    }
}

/// Write transaction holding the table lock until committed or dropped.
pub struct MemoryWriter<'a> {
    tables: RwLockWriteGuard<'a, Tables>,
}

impl IndexWriter for MemoryWriter<'_> {
    fn code_for_fingerprint(&self, fingerprint: Fingerprint) -> StoreResult<Option<ShortCode>> {
        Ok(self
            .tables
            .reverse
            .get(&fingerprint.as_u64())
            .map(|code| ShortCode::new_unchecked(code.clone())))
    }

    fn url_for_code(&self, code: &str) -> StoreResult<Option<String>> {
        Ok(self.tables.forward.get(code).cloned())
    }

    fn insert_forward(&mut self, code: &ShortCode, url: &str) -> StoreResult<()> {
        if self.tables.forward.contains_key(code.as_str()) {
            return Err(StoreError::KeyExists(code.to_string()));
        }
        self.tables
            .forward
            .insert(code.as_str().to_owned(), url.to_owned());
        Ok(())
    }

    fn put_reverse(&mut self, fingerprint: Fingerprint, code: &ShortCode) -> StoreResult<()> {
        self.tables
            .reverse
            .insert(fingerprint.as_u64(), code.as_str().to_owned());
        Ok(())
    }

    fn commit(self) -> StoreResult<()> {
        Ok(())
    }
}

/// Read transaction holding a shared lock on the tables.
pub struct MemoryReader<'a> {
    tables: RwLockReadGuard<'a, Tables>,
}

impl IndexReader for MemoryReader<'_> {
    fn url_for_code(&self, code: &str) -> StoreResult<Option<String>> {
        Ok(self.tables.forward.get(code).cloned())
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Backend("memory store lock poisoned".to_string())
}

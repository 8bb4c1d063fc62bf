use ::redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use taut_core::error::{StoreError, StoreResult};
use taut_core::fingerprint::Fingerprint;
use taut_core::shortcode::ShortCode;
use taut_core::store::{IndexReader, IndexStore, IndexWriter};

/// Forward table: short code -> original URL.
const FORWARD: TableDefinition<&str, &str> = TableDefinition::new("forward");
/// Reverse table: URL fingerprint -> short code.
const REVERSE: TableDefinition<u64, &str> = TableDefinition::new("reverse");

/// Durable index backed by a single redb database file.
///
/// redb provides serializable ACID transactions with exactly one live write
/// transaction at a time, so an [`IndexWriter`] holds process-wide writer
/// exclusivity for its whole lifetime. Readers run on independent
/// snapshots and never block the writer.
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Opens (or creates) the database file and ensures both index tables
    /// exist, so later read transactions can open them unconditionally.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path).map_err(backend)?;

        let txn = db.begin_write().map_err(backend)?;
        {
            txn.open_table(FORWARD).map_err(backend)?;
            txn.open_table(REVERSE).map_err(backend)?;
        }
        txn.commit().map_err(backend)?;

        Ok(Self { db })
    }
}

impl std::fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore").finish_non_exhaustive()
    }
}

impl IndexStore for RedbStore {
    type Writer<'a>
        = RedbWriter
    where
        Self: 'a;
    type Reader<'a>
        = RedbReader
    where
        Self: 'a;

    fn begin_write(&self) -> StoreResult<RedbWriter> {
        let txn = self.db.begin_write().map_err(backend)?;
        Ok(RedbWriter { txn })
    }

    fn begin_read(&self) -> StoreResult<RedbReader> {
        let txn = self.db.begin_read().map_err(backend)?;
        Ok(RedbReader { txn })
    }
}

/// Read-write transaction over the redb tables.
pub struct RedbWriter {
    txn: redb::WriteTransaction,
}

impl IndexWriter for RedbWriter {
    fn code_for_fingerprint(&self, fingerprint: Fingerprint) -> StoreResult<Option<ShortCode>> {
        let table = self.txn.open_table(REVERSE).map_err(backend)?;
        let code = table
            .get(fingerprint.as_u64())
            .map_err(backend)?
            .map(|guard| ShortCode::new_unchecked(guard.value()));
        Ok(code)
    }

    fn url_for_code(&self, code: &str) -> StoreResult<Option<String>> {
        let table = self.txn.open_table(FORWARD).map_err(backend)?;
        let url = table
            .get(code)
            .map_err(backend)?
            .map(|guard| guard.value().to_owned());
        Ok(url)
    }

    fn insert_forward(&mut self, code: &ShortCode, url: &str) -> StoreResult<()> {
        let mut table = self.txn.open_table(FORWARD).map_err(backend)?;
        if table.get(code.as_str()).map_err(backend)?.is_some() {
            return Err(StoreError::KeyExists(code.to_string()));
        }
        table.insert(code.as_str(), url).map_err(backend)?;
        Ok(())
    }

    fn put_reverse(&mut self, fingerprint: Fingerprint, code: &ShortCode) -> StoreResult<()> {
        let mut table = self.txn.open_table(REVERSE).map_err(backend)?;
        table
            .insert(fingerprint.as_u64(), code.as_str())
            .map_err(backend)?;
        Ok(())
    }

    fn commit(self) -> StoreResult<()> {
        self.txn.commit().map_err(backend)
    }
}

/// Read-only snapshot over the forward table.
pub struct RedbReader {
    txn: redb::ReadTransaction,
}

impl IndexReader for RedbReader {
    fn url_for_code(&self, code: &str) -> StoreResult<Option<String>> {
        let table = self.txn.open_table(FORWARD).map_err(backend)?;
        let url = table
            .get(code)
            .map_err(backend)?
            .map(|guard| guard.value().to_owned());
        Ok(url)
    }
}

/// Funnels every redb error class into the store contract's fatal variant.
fn backend(err: impl Into<redb::Error>) -> StoreError {
    StoreError::Backend(err.into().to_string())
}

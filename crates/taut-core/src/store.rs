use crate::error::StoreResult;
use crate::fingerprint::Fingerprint;
use crate::shortcode::ShortCode;

/// A durable bidirectional index shared by all request handlers.
///
/// Backends expose two tables: the forward table (short code -> original
/// URL) and the reverse table (URL fingerprint -> short code). All access
/// goes through explicit transactions. Writers are mutually exclusive for
/// their whole lifetime; that exclusivity is what makes the engine's
/// check-then-insert sequence atomic.
pub trait IndexStore: Send + Sync + 'static {
    type Writer<'a>: IndexWriter
    where
        Self: 'a;
    type Reader<'a>: IndexReader
    where
        Self: 'a;

    /// Begins a read-write transaction, blocking until the backend's single
    /// writer slot is free.
    fn begin_write(&self) -> StoreResult<Self::Writer<'_>>;

    /// Begins a read-only snapshot transaction. Readers never block writers
    /// or each other.
    fn begin_read(&self) -> StoreResult<Self::Reader<'_>>;
}

/// A read-write transaction over both index tables.
///
/// Dropping a writer without calling [`commit`](IndexWriter::commit)
/// aborts it: none of its writes survive.
pub trait IndexWriter {
    /// Reverse-table lookup: the code previously assigned to `fingerprint`.
    fn code_for_fingerprint(&self, fingerprint: Fingerprint) -> StoreResult<Option<ShortCode>>;

    /// Forward-table lookup inside the write transaction.
    fn url_for_code(&self, code: &str) -> StoreResult<Option<String>>;

    /// Insert-if-absent into the forward table.
    ///
    /// Fails with [`StoreError::KeyExists`](crate::StoreError::KeyExists)
    /// when `code` is already taken; the existing entry is left untouched.
    fn insert_forward(&mut self, code: &ShortCode, url: &str) -> StoreResult<()>;

    /// Unconditional upsert into the reverse table.
    fn put_reverse(&mut self, fingerprint: Fingerprint, code: &ShortCode) -> StoreResult<()>;

    /// Commits the transaction, making its writes durable and visible.
    fn commit(self) -> StoreResult<()>;
}

/// A read-only transaction over the forward table.
pub trait IndexReader {
    /// Forward-table lookup.
    fn url_for_code(&self, code: &str) -> StoreResult<Option<String>>;
}

//! Storage backends for the taut index.
//!
//! [`RedbStore`] is the durable production backend; [`MemoryStore`] backs
//! tests and local development.

pub mod memory;
pub mod redb;

pub use memory::MemoryStore;
pub use self::redb::RedbStore;

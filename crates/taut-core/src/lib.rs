//! Core types and traits for the taut URL shortener.
//!
//! This crate provides the shared vocabulary (short codes, URL
//! fingerprints, errors) and the store contract implemented by the
//! storage backends.

pub mod alphabet;
pub mod error;
pub mod fingerprint;
pub mod shortcode;
pub mod store;

pub use error::{CoreError, StoreError, StoreResult};
pub use fingerprint::Fingerprint;
pub use shortcode::ShortCode;
pub use store::{IndexReader, IndexStore, IndexWriter};

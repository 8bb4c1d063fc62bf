//! The taut allocation engine.
//!
//! Turns a submitted URL into a short code, allocating a fresh one on
//! first sight and returning the existing one after that, and resolves
//! codes back to URLs. Storage is abstracted behind the `taut-core` store
//! contract.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;

pub use config::EngineConfig;
pub use engine::AllocationEngine;
pub use error::EngineError;
pub use generator::{CodeGenerator, RandomGenerator};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::generator::CodeGenerator;
use std::sync::Arc;
use taut_core::store::{IndexReader, IndexStore, IndexWriter};
use taut_core::{Fingerprint, ShortCode, StoreError};
use tracing::debug;

/// Accepted scheme prefixes for submitted URLs.
const ACCEPTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// The short-code allocation and mapping engine.
///
/// One engine is constructed at startup and shared by every request
/// handler. [`submit`](AllocationEngine::submit) runs inside a single
/// write transaction so the reverse-index check, the forward insert, and
/// the reverse write are atomic with respect to all other submissions;
/// [`resolve`](AllocationEngine::resolve) uses independent read
/// snapshots.
#[derive(Debug, Clone)]
pub struct AllocationEngine<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    config: EngineConfig,
}

impl<S: IndexStore, G: CodeGenerator> AllocationEngine<S, G> {
    pub fn new(store: S, generator: G, config: EngineConfig) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            config,
        }
    }

    /// Returns the underlying store handle.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the short code for `url`, allocating one if the URL has not
    /// been seen before.
    ///
    /// Re-submitting a URL returns its existing code without writing
    /// anything. A fresh URL gets a random candidate of the configured
    /// minimum length; after `retry_budget` collisions at one length the
    /// candidate length grows by one and the budget resets, so the loop
    /// terminates with probability 1.
    pub fn submit(&self, url: &str) -> Result<ShortCode> {
        validate_url(url)?;

        let fingerprint = Fingerprint::of(url);
        let mut txn = self.store.begin_write()?;

        // The fingerprint is collision-tolerant: trust a reverse hit only
        // if its forward entry stores this exact URL.
        let mut reverse_slot_taken = false;
        if let Some(code) = txn.code_for_fingerprint(fingerprint)? {
            match txn.url_for_code(code.as_str())? {
                Some(stored) if stored == url => return Ok(code),
                Some(_) => {
                    debug!(code = %code, "fingerprint already owned by a different url");
                    reverse_slot_taken = true;
                }
                // Dangling reverse entry; reclaimed by the upsert below.
                None => {}
            }
        }

        let budget = self.config.retry_budget.max(1);
        let mut length = self.config.min_code_length;
        let mut tries = budget;
        loop {
            let code = self.generator.generate(length);
            match txn.insert_forward(&code, url) {
                Ok(()) => {
                    if !reverse_slot_taken {
                        txn.put_reverse(fingerprint, &code)?;
                    }
                    txn.commit()?;
                    return Ok(code);
                }
                Err(StoreError::KeyExists(_)) => {
                    tries -= 1;
                    if tries == 0 {
                        tries = budget;
                        length += 1;
                        debug!(length, "code space saturated, growing candidate length");
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Looks up the original URL for `code`.
    ///
    /// An unknown code is an expected outcome (mistyped or stale links),
    /// reported as [`EngineError::UnknownCode`].
    pub fn resolve(&self, code: &str) -> Result<String> {
        let txn = self.store.begin_read()?;
        txn.url_for_code(code)?
            .ok_or_else(|| EngineError::UnknownCode(code.to_string()))
    }
}

fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(EngineError::InvalidUrl("url cannot be empty".to_string()));
    }

    let Some(rest) = ACCEPTED_SCHEMES
        .iter()
        .find_map(|scheme| url.strip_prefix(scheme))
    else {
        return Err(EngineError::InvalidUrl(format!(
            "url must start with http:// or https://: {url}"
        )));
    };

    if rest.is_empty() {
        return Err(EngineError::InvalidUrl(format!("url has no host: {url}")));
    }

    Ok(())
}

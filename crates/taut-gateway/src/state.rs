use std::sync::Arc;
use taut_engine::{AllocationEngine, RandomGenerator};
use taut_store::RedbStore;

/// The engine variant served by the gateway binary.
pub type GatewayEngine = AllocationEngine<RedbStore, RandomGenerator>;

#[derive(Clone)]
pub struct AppState {
    engine: Arc<GatewayEngine>,
    base_url: String,
}

impl AppState {
    pub fn new(engine: GatewayEngine, public_base_url: impl Into<String>) -> Self {
        Self {
            engine: Arc::new(engine),
            base_url: public_base_url.into(),
        }
    }

    /// Shared handle to the allocation engine.
    pub fn engine(&self) -> Arc<GatewayEngine> {
        Arc::clone(&self.engine)
    }

    /// Base used when rendering short URLs back to clients.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

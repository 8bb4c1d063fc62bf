use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

pub const DEFAULT_MIN_CODE_LENGTH: usize = 4;
pub const DEFAULT_RETRY_BUDGET: u32 = 3;

/// Tuning knobs for the allocation engine.
///
/// Shared read-only by every allocation attempt: escalation of the
/// candidate length is local to a single `submit` call and is never
/// written back here.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
pub struct EngineConfig {
    /// Length of the first candidate codes drawn for a new URL.
    #[builder(default = DEFAULT_MIN_CODE_LENGTH)]
    pub min_code_length: usize,

    /// Failed insert attempts at one length before the candidate length
    /// grows by one.
    #[builder(default = DEFAULT_RETRY_BUDGET)]
    pub retry_budget: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_defaults() {
        let config = EngineConfig::builder().build();
        assert_eq!(config.min_code_length, DEFAULT_MIN_CODE_LENGTH);
        assert_eq!(config.retry_budget, DEFAULT_RETRY_BUDGET);
    }

    #[test]
    fn builder_overrides() {
        let config = EngineConfig::builder()
            .min_code_length(6)
            .retry_budget(5)
            .build();
        assert_eq!(config.min_code_length, 6);
        assert_eq!(config.retry_budget, 5);
    }
}

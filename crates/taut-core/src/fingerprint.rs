use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// A fixed-width content fingerprint of an original URL.
///
/// Used solely as the reverse-table key for submission deduplication. It is
/// a fast non-cryptographic digest, not a security primitive; collisions
/// between distinct URLs are possible and handled by the allocation
/// engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Digests a URL into its fingerprint.
    pub fn of(url: &str) -> Self {
        Self(xxh3_64(url.as_bytes()))
    }

    /// Raw 64-bit value, the reverse-table key.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for Fingerprint {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

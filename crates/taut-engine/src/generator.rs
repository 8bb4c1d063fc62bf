use rand::Rng;
use taut_core::alphabet::CODE_ALPHABET;
use taut_core::ShortCode;

/// Trait for producing candidate short codes.
///
/// Implementations are pure generators that don't interact with storage:
/// uniqueness is enforced downstream by the forward table's
/// insert-if-absent semantics.
pub trait CodeGenerator: Send + Sync + 'static {
    /// Produces a candidate of exactly `length` characters drawn from the
    /// code alphabet. Must not block.
    fn generate(&self, length: usize) -> ShortCode;
}

/// Draws every character independently and uniformly from
/// [`CODE_ALPHABET`] using the process-wide thread RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomGenerator {
    fn generate(&self, length: usize) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..length)
            .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

/// Create the deterministic random source used for weight initialization.
pub fn seeded_rng(seed: u64) -> ChaCha12Rng {
    ChaCha12Rng::seed_from_u64(seed)
}

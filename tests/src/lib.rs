//! Shared helpers for the ECCRYPT integration test suite

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// A deterministic CSPRNG for reproducible test runs.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// A uniformly random bit vector of the given length.
pub fn random_bits(rng: &mut ChaCha20Rng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0..2u8)).collect()
}

/// Hamming weight of a bit vector.
pub fn weight(bits: &[u8]) -> usize {
    bits.iter().map(|&b| b as usize).sum()
}

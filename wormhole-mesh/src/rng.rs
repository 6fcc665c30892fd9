//! Random sources for radial jitter
//!
//! Generation takes any `rand::Rng`. These helpers build the PCG generator
//! used by default, either from a fixed seed (reproducible output) or from
//! a fresh random seed that is handed back so the run can be repeated.

use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::debug;

/// Deterministic jitter source for a given seed
pub fn seeded_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// Jitter source from a fresh random seed, returned alongside the rng
pub fn entropy_rng() -> (Pcg64, u64) {
    let seed = rand::random::<u64>();
    debug!("entropy_rng: seed {}", seed);
    (seeded_rng(seed), seed)
}

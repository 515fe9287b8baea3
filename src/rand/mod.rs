//! Random sources for password generation.
//!
//! Generators never build their own RNG; they borrow one from the caller.
//! This module hands out the two sources the crate cares about.

use ::rand::rngs::{OsRng, StdRng};
use ::rand::{CryptoRng, Rng, SeedableRng};

/// Default cryptographically secure RNG.
pub fn csprng() -> impl CryptoRng + Rng {
    OsRng
}

/// Reproducible generator: the same seed replays the same draws.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Name of the entropy source behind [`csprng`].
pub fn entropy_source() -> &'static str {
    "OS CSPRNG (getrandom)"
}

//! Injectable randomness for tie-breaking jitter.
//!
//! Scores never read a global generator. Callers pass a [`JitterSource`] so tests
//! can pin or disable jitter and repeated plays can be reproduced from a seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform samples in `[0, 1)`.
pub trait JitterSource {
    fn unit(&mut self) -> f64;

    /// Uniform sample in `[0, upper)`; zero when `upper` is not positive.
    fn jitter(&mut self, upper: f64) -> f64 {
        if upper > 0.0 {
            self.unit() * upper
        } else {
            0.0
        }
    }
}

/// ChaCha8-backed jitter, reproducible when built from a seed.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: ChaCha8Rng,
}

impl SeededJitter {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeded when `seed` is present, otherwise drawn from OS entropy.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl JitterSource for SeededJitter {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Disables jitter entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn unit(&mut self) -> f64 {
        0.0
    }
}

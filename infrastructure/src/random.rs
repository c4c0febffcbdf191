//! Random source adapters
//!
//! Production wiring uses [`EntropyRandom`]; tests and regression
//! harnesses use [`SeededRandom`] so shuffle order and id suffixes are
//! reproducible.

use eduquiz_application::RandomSource;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Mutex;

/// Entropy-backed random source (production default)
pub struct EntropyRandom {
    rng: Mutex<StdRng>,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_u64(&self) -> u64 {
        self.rng.lock().unwrap().next_u64()
    }
}

/// Fixed-seed random source for reproducible runs
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_u64(&self) -> u64 {
        self.rng.lock().unwrap().next_u64()
    }
}

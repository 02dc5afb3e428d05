//! Randomness adapters

use crate::ports::random::RandomPort;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::sync::Mutex;

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomPort for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }

    fn chance(&self, p: f64) -> bool {
        rand::rng().random_bool(p.clamp(0.0, 1.0))
    }
}

/// Deterministic source for tests and reproducible demos.
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

impl RandomPort for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        self.rng.lock().unwrap().random_range(0..len)
    }

    fn chance(&self, p: f64) -> bool {
        self.rng.lock().unwrap().random_bool(p.clamp(0.0, 1.0))
    }
}

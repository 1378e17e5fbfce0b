//! Random number generation provider abstraction.
//!
//! This module provides a provider pattern for random number generation,
//! consistent with the [`TimeProvider`](crate::time::TimeProvider)
//! abstraction: a deterministic seeded implementation for simulation and
//! tests, and a thread-local OS-backed implementation for real runs.

use std::cell::RefCell;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Provider trait for random number generation.
///
/// Abstracts the source of randomness so that failure injection can be
/// deterministic in simulation and genuinely random in real runs.
pub trait RandomProvider: Clone {
    /// Generate a random f64 in `[0.0, 1.0)`.
    fn random_ratio(&self) -> f64;

    /// Generate a random bool with the given probability of being true.
    ///
    /// The probability must be between 0.0 and 1.0.
    fn random_bool(&self, probability: f64) -> bool {
        debug_assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be between 0.0 and 1.0, got {}",
            probability
        );
        self.random_ratio() < probability
    }
}

/// Deterministic random provider seeded for reproducible simulation runs.
///
/// Uses `ChaCha8Rng` so the same seed always produces the same sequence.
/// Clones share the underlying generator state, so all consumers of one
/// provider draw from a single deterministic sequence.
#[derive(Debug, Clone)]
pub struct SimRandomProvider {
    rng: Rc<RefCell<ChaCha8Rng>>,
}

impl SimRandomProvider {
    /// Create a new deterministic random provider with the specified seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rc::new(RefCell::new(ChaCha8Rng::seed_from_u64(seed))),
        }
    }
}

impl RandomProvider for SimRandomProvider {
    fn random_ratio(&self) -> f64 {
        self.rng.borrow_mut().gen::<f64>()
    }
}

/// Random provider backed by the thread-local OS-seeded RNG.
#[derive(Debug, Clone, Default)]
pub struct ThreadRngProvider;

impl ThreadRngProvider {
    /// Create a new thread-rng provider.
    pub fn new() -> Self {
        Self
    }
}

impl RandomProvider for ThreadRngProvider {
    fn random_ratio(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

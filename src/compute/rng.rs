//! Shared random source for the engine and caller-supplied operators.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::prelude::*;

/// Random number generator shared between the engine and entity operators.
///
/// Every draw takes the lock for exactly one sample, so operators may call
/// back into it from any thread while the engine holds a shared reference.
#[derive(Debug)]
pub struct EngineRng {
    rng: Mutex<StdRng>,
}

impl EngineRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create from an optional seed, falling back to entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::random(),
        }
    }

    // A panic can only happen between draws, so a poisoned generator is
    // still in a valid state.
    fn lock(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Uniform integer in `[0, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn rand_int(&self, n: usize) -> usize {
        self.lock().gen_range(0..n)
    }

    /// Uniform float in `[0, 1)`.
    pub fn rand_float(&self) -> f64 {
        self.lock().r#gen::<f64>()
    }

    /// Uniform float in `[low, high)`.
    pub fn rand_range(&self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.rand_float()
    }

    /// Standard normal sample (mean 0, stddev 1).
    pub fn rand_norm(&self) -> f64 {
        self.lock().sample(rand_distr::StandardNormal)
    }

    /// Exponential sample with rate 1 (mean 1).
    pub fn rand_exp(&self) -> f64 {
        self.lock().sample(rand_distr::Exp1)
    }

    /// Bernoulli trial with success probability `p`. Values outside `[0, 1]`
    /// saturate.
    pub fn chance(&self, p: f64) -> bool {
        self.rand_float() < p
    }
}

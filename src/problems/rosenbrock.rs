//! Rosenbrock's banana function, maximized as `-(1-x)² - 100(y-x²)²`.

use serde::{Deserialize, Serialize};

use crate::compute::{EngineRng, Entity};

use super::blend;

const SEED_RADIUS: f64 = 5.0;

/// A point in the plane; the optimum is `(1, 1)` with fitness 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rosenbrock {
    pub x: f64,
    pub y: f64,
}

impl Rosenbrock {
    /// Uniform sample in `[-5, 5]²`.
    pub fn random(rng: &EngineRng) -> Self {
        Self {
            x: rng.rand_range(-SEED_RADIUS, SEED_RADIUS),
            y: rng.rand_range(-SEED_RADIUS, SEED_RADIUS),
        }
    }
}

impl Entity for Rosenbrock {
    fn fitness(&self) -> f64 {
        let a = 1.0 - self.x;
        let b = self.y - self.x * self.x;
        -(a * a) - 100.0 * b * b
    }

    fn mutate(&self, rng: &EngineRng) -> Self {
        Self::random(rng)
    }

    /// Ignores the selection bias and mixes each coordinate with its own
    /// ratio drawn from the engine's generator.
    fn crossover(&self, other: &Self, _weight: f64, rng: &EngineRng) -> Self {
        Self {
            x: blend(self.x, other.x, rng.rand_float()),
            y: blend(self.y, other.y, rng.rand_float()),
        }
    }
}

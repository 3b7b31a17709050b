//! A small continuous linear program solved through penalty shaping.
//!
//! ```text
//! max  2x + 3y
//! s.t. 4x + 3y <= 10
//!      3x + 5y <= 12
//!      x, y >= 0
//! ```

use serde::{Deserialize, Serialize};

use crate::compute::{EngineRng, Entity};

use super::blend;

/// Upper bound of the seeding box `[0, 10)²`.
const SEED_BOUND: f64 = 10.0;

/// A candidate `(x, y)` for the linear program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearProgram {
    pub x: f64,
    pub y: f64,
}

impl LinearProgram {
    /// Objective value at the optimal vertex `(14/11, 18/11)`.
    pub const OPTIMUM: f64 = 82.0 / 11.0;

    /// Uniform sample in `[0, 10)²`.
    pub fn random(rng: &EngineRng) -> Self {
        Self {
            x: rng.rand_range(0.0, SEED_BOUND),
            y: rng.rand_range(0.0, SEED_BOUND),
        }
    }

    /// Sum of relative constraint violations, zero when feasible.
    pub fn violation(&self) -> f64 {
        let mut s = 0.0;
        let d = (4.0 * self.x + 3.0 * self.y) / 10.0;
        if d > 1.0 {
            s += d - 1.0;
        }
        let d = (3.0 * self.x + 5.0 * self.y) / 12.0;
        if d > 1.0 {
            s += d - 1.0;
        }
        s
    }
}

impl Entity for LinearProgram {
    /// The objective when feasible, otherwise the negated violation, so any
    /// feasible point beats any infeasible one.
    fn fitness(&self) -> f64 {
        let s = self.violation();
        if s > 0.0 {
            -s
        } else {
            2.0 * self.x + 3.0 * self.y
        }
    }

    fn mutate(&self, rng: &EngineRng) -> Self {
        Self::random(rng)
    }

    fn crossover(&self, other: &Self, weight: f64, _rng: &EngineRng) -> Self {
        Self {
            x: blend(self.x, other.x, weight),
            y: blend(self.y, other.y, weight),
        }
    }
}

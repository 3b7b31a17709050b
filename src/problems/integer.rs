//! Integer linear program over a lattice.
//!
//! ```text
//! max  5x + 8y
//! s.t. x + y <= 6
//!      5x + 9y <= 45
//!      x, y >= 0, integer
//! ```

use serde::{Deserialize, Serialize};

use crate::compute::{EngineRng, Entity};

use super::blend;

/// Seeds are drawn from `{0, .., 9}²`.
const SEED_BOUND: usize = 10;

/// A lattice point `(x, y)`; coordinates are always whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegerProgram {
    pub x: f64,
    pub y: f64,
}

impl IntegerProgram {
    /// Objective value at the optimum `(0, 5)`.
    pub const OPTIMUM: f64 = 40.0;

    /// Uniform lattice point in `{0, .., 9}²`.
    pub fn random(rng: &EngineRng) -> Self {
        Self {
            x: rng.rand_int(SEED_BOUND) as f64,
            y: rng.rand_int(SEED_BOUND) as f64,
        }
    }

    /// Total absolute constraint excess, zero when feasible.
    pub fn violation(&self) -> f64 {
        (self.x + self.y - 6.0).max(0.0) + (5.0 * self.x + 9.0 * self.y - 45.0).max(0.0)
    }
}

impl Entity for IntegerProgram {
    fn fitness(&self) -> f64 {
        let s = self.violation();
        if s > 0.0 {
            -s
        } else {
            5.0 * self.x + 8.0 * self.y
        }
    }

    fn mutate(&self, rng: &EngineRng) -> Self {
        Self::random(rng)
    }

    /// Blend, then round back onto the lattice.
    fn crossover(&self, other: &Self, weight: f64, _rng: &EngineRng) -> Self {
        Self {
            x: blend(self.x, other.x, weight).round(),
            y: blend(self.y, other.y, weight).round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimum() {
        let best = IntegerProgram { x: 0.0, y: 5.0 };
        assert_eq!(best.violation(), 0.0);
        assert_eq!(best.fitness(), IntegerProgram::OPTIMUM);

        // Every feasible lattice point scores at most the optimum.
        for x in 0..10 {
            for y in 0..10 {
                let p = IntegerProgram {
                    x: x as f64,
                    y: y as f64,
                };
                if p.violation() == 0.0 {
                    assert!(p.fitness() <= IntegerProgram::OPTIMUM);
                } else {
                    assert!(p.fitness() < 0.0);
                }
            }
        }
    }

    #[test]
    fn test_crossover_stays_on_lattice() {
        let rng = EngineRng::new(5);
        let a = IntegerProgram { x: 1.0, y: 4.0 };
        let b = IntegerProgram { x: 6.0, y: 0.0 };
        for w in [0.0, 0.13, 0.5, 0.77, 1.0] {
            let c = a.crossover(&b, w, &rng);
            assert_eq!(c.x, c.x.round());
            assert_eq!(c.y, c.y.round());
        }
    }
}

//! Unconstrained minimization of `x² + y²`.

use serde::{Deserialize, Serialize};

use crate::compute::{EngineRng, Entity};

use super::blend;

/// Half-width of the seeding box `[-5, 5]²`.
const SEED_RADIUS: f64 = 5.0;

/// Standard deviation of the local mutation step.
const MUTATION_STEP: f64 = 0.1;

/// A point in the plane whose fitness is `-(x² + y²)`, maximized at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub x: f64,
    pub y: f64,
}

impl Sphere {
    /// Uniform sample in `[-5, 5]²`.
    pub fn random(rng: &EngineRng) -> Self {
        Self {
            x: rng.rand_range(-SEED_RADIUS, SEED_RADIUS),
            y: rng.rand_range(-SEED_RADIUS, SEED_RADIUS),
        }
    }
}

impl Entity for Sphere {
    fn fitness(&self) -> f64 {
        -(self.x * self.x + self.y * self.y)
    }

    /// Gaussian perturbation around `self`.
    fn mutate(&self, rng: &EngineRng) -> Self {
        Self {
            x: self.x + MUTATION_STEP * rng.rand_norm(),
            y: self.y + MUTATION_STEP * rng.rand_norm(),
        }
    }

    fn crossover(&self, other: &Self, weight: f64, _rng: &EngineRng) -> Self {
        Self {
            x: blend(self.x, other.x, weight),
            y: blend(self.y, other.y, weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_peaks_at_origin() {
        let origin = Sphere { x: 0.0, y: 0.0 };
        let off = Sphere { x: 3.0, y: -4.0 };
        assert_eq!(origin.fitness(), 0.0);
        assert_eq!(off.fitness(), -25.0);
    }

    #[test]
    fn test_crossover_weight_extremes() {
        let rng = EngineRng::new(0);
        let a = Sphere { x: 1.0, y: 2.0 };
        let b = Sphere { x: -3.0, y: 6.0 };
        assert_eq!(a.crossover(&b, 1.0, &rng), a);
        assert_eq!(a.crossover(&b, 0.0, &rng), b);
        assert_eq!(a.crossover(&b, 0.5, &rng), Sphere { x: -1.0, y: 4.0 });
    }

    #[test]
    fn test_random_in_box() {
        let rng = EngineRng::new(1);
        for _ in 0..500 {
            let s = Sphere::random(&rng);
            assert!(s.x.abs() <= SEED_RADIUS && s.y.abs() <= SEED_RADIUS);
        }
    }

    #[test]
    fn test_mutation_is_local() {
        let rng = EngineRng::new(2);
        let s = Sphere { x: 1.0, y: 1.0 };
        for _ in 0..100 {
            let m = s.mutate(&rng);
            assert!((m.x - s.x).abs() < 1.0 && (m.y - s.y).abs() < 1.0);
        }
    }
}

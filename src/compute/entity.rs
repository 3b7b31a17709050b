//! The capability set the engine requires from a candidate solution.

use super::rng::EngineRng;

/// A candidate solution evolved by the [`Engine`](super::Engine).
///
/// The engine never inspects an entity beyond these three operations and
/// never mutates one in place: operators always return a new entity.
/// Operators that need randomness should draw from the `rng` they are handed,
/// which is the engine's own generator, so seeded runs stay reproducible.
pub trait Entity: Clone {
    /// Objective value, higher is better. May be negative.
    ///
    /// Must be a pure, total function of the entity's state. Infeasible
    /// states should be expressed through penalty shaping rather than a
    /// failure path.
    fn fitness(&self) -> f64;

    /// Produce a mutated entity.
    ///
    /// Commonly a fresh sample that ignores `self`, but a local perturbation
    /// of `self` works as well.
    fn mutate(&self, rng: &EngineRng) -> Self;

    /// Produce an offspring of `self` and `other`.
    ///
    /// `weight` lies in `[0, 1]` and is the bias toward `self`. The engine
    /// passes `self`'s share of the pair's combined selection weight, so the
    /// fitter parent pulls the offspring closer.
    fn crossover(&self, other: &Self, weight: f64, rng: &EngineRng) -> Self;
}

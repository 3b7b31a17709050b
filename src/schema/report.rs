//! Progress and result types reported by the engine.

use serde::{Deserialize, Serialize};

/// Snapshot of the engine after a generation has been evaluated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GenerationStats {
    /// Generations completed since construction.
    pub generation: usize,
    /// All-time best fitness.
    pub elite_fitness: f64,
    /// Mean raw fitness of the current population.
    pub mean_fitness: f64,
    /// Standard deviation of raw fitness (`1.0` when degenerate).
    pub fitness_std: f64,
    /// Standard deviation of the initial population.
    pub baseline_std: f64,
    /// Mutation probability that will drive the next step.
    pub mutation_probability: f64,
    /// Sum of the scaled selection weights.
    pub weight_sum: f64,
}

/// Reason the convergence loop stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// The elite did not improve for `patience` generations.
    Converged,
    /// `max_iterations` generations ran.
    MaxIterations,
}

/// Result of [`Engine::evolve`](crate::compute::Engine::evolve).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolveOutcome<E> {
    /// Best entity found.
    pub elite: E,
    /// Fitness of the elite.
    pub fitness: f64,
    /// Whether the run converged before hitting the iteration cap.
    pub converged: bool,
    /// Generations executed by this call.
    pub generations: usize,
    /// Why the loop stopped.
    pub stop_reason: StopReason,
}

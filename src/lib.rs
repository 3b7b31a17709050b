//! Adaptive GA - A genetic algorithm with logistic fitness scaling and
//! self-tuning mutation pressure.
//!
//! Callers describe a candidate solution by implementing [`Entity`]
//! (fitness, mutation, crossover); the [`Engine`] supplies everything else:
//! selection, scaling, adaptive mutation probability, and termination.
//! Fitness may be negative or arbitrarily scaled, and no mutation rate has to
//! be tuned.
//!
//! # Architecture
//!
//! - `schema`: Configuration and reporting types
//! - `compute`: The engine, selection, scaling, and the shared random source
//! - `problems`: Built-in benchmark entities
//!
//! # Example
//!
//! ```rust
//! use adaptive_ga::{Engine, EngineRng, Entity};
//!
//! #[derive(Debug, Clone)]
//! struct Point(f64);
//!
//! impl Entity for Point {
//!     fn fitness(&self) -> f64 {
//!         -(self.0 - 3.0).powi(2)
//!     }
//!
//!     fn mutate(&self, rng: &EngineRng) -> Self {
//!         Point(rng.rand_range(-10.0, 10.0))
//!     }
//!
//!     fn crossover(&self, other: &Self, weight: f64, _rng: &EngineRng) -> Self {
//!         Point(weight * self.0 + (1.0 - weight) * other.0)
//!     }
//! }
//!
//! let mut engine = Engine::new(100, |rng| Point(rng.rand_range(-10.0, 10.0)))?;
//! let outcome = engine.evolve(32, 10_000)?;
//!
//! println!("x = {:.4}, fitness = {:.6}", outcome.elite.0, outcome.fitness);
//! # Ok::<(), adaptive_ga::ConfigError>(())
//! ```

pub mod compute;
pub mod problems;
pub mod schema;

// Re-export commonly used types
pub use compute::{Engine, EngineRng, Entity, ParentPair};
pub use schema::{
    ConfigError, EngineConfig, EvolveConfig, EvolveOutcome, GenerationStats, MutationConfig,
    RunConfig, StopReason,
};

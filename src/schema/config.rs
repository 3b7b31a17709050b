//! Configuration types for the evolution engine and its convergence loop.

use serde::{Deserialize, Serialize};

/// Engine construction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of entities per generation. Must be at least 2.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Random seed for reproducibility. `None` seeds from entropy.
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Adaptive mutation schedule.
    #[serde(default)]
    pub mutation: MutationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            random_seed: None,
            mutation: MutationConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Config with the given population size and defaults elsewhere.
    pub fn with_population_size(population_size: usize) -> Self {
        Self {
            population_size,
            ..Default::default()
        }
    }

    /// Validate engine configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall {
                size: self.population_size,
            });
        }
        self.mutation.validate()
    }
}

fn default_population_size() -> usize {
    100
}

/// Constants of the adaptive mutation schedule
/// `pm = ceiling * exp(-decay * std / std0)`, clamped to `[floor, ceiling]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationConfig {
    /// How quickly the probability falls as diversity grows.
    #[serde(default = "default_decay")]
    pub decay: f64,
    /// Lowest mutation probability.
    #[serde(default)]
    pub floor: f64,
    /// Highest mutation probability, reached when diversity vanishes.
    #[serde(default = "default_ceiling")]
    pub ceiling: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            decay: default_decay(),
            floor: 0.0,
            ceiling: default_ceiling(),
        }
    }
}

impl MutationConfig {
    /// Validate the schedule constants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.decay.is_finite() && self.decay > 0.0) {
            return Err(ConfigError::InvalidMutation(format!(
                "decay {} must be positive and finite",
                self.decay
            )));
        }
        if !(0.0..=1.0).contains(&self.floor) || !(0.0..=1.0).contains(&self.ceiling) {
            return Err(ConfigError::InvalidMutation(format!(
                "floor ({}) and ceiling ({}) must lie in [0, 1]",
                self.floor, self.ceiling
            )));
        }
        if self.floor > self.ceiling {
            return Err(ConfigError::InvalidMutation(format!(
                "floor ({}) > ceiling ({})",
                self.floor, self.ceiling
            )));
        }
        Ok(())
    }
}

fn default_decay() -> f64 {
    10.0
}
fn default_ceiling() -> f64 {
    1.0
}

/// Limits of the convergence loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvolveConfig {
    /// Consecutive generations without elite improvement that count as
    /// converged.
    #[serde(default = "default_patience")]
    pub patience: usize,
    /// Hard cap on the number of generations.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            patience: default_patience(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl EvolveConfig {
    /// Loop limits with the given patience and iteration cap.
    pub fn new(patience: usize, max_iterations: usize) -> Self {
        Self {
            patience,
            max_iterations,
        }
    }

    /// Validate loop limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.patience == 0 {
            return Err(ConfigError::InvalidPatience);
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidMaxIterations);
        }
        Ok(())
    }
}

fn default_patience() -> usize {
    32
}
fn default_max_iterations() -> usize {
    100_000
}

/// A complete run: engine settings plus loop limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Population and mutation settings.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Patience and iteration cap for `evolve`.
    #[serde(default)]
    pub evolve: EvolveConfig,
}

impl RunConfig {
    /// Validate both halves of the run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.evolve.validate()
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Population size must be at least 2, got {size}")]
    PopulationTooSmall { size: usize },
    #[error("Patience must be at least 1")]
    InvalidPatience,
    #[error("Max iterations must be at least 1")]
    InvalidMaxIterations,
    #[error("Invalid mutation schedule: {0}")]
    InvalidMutation(String),
}

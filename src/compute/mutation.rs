//! Adaptive mutation probability.

use crate::schema::MutationConfig;

/// Mutation probability for a population whose fitness spread is `std`,
/// relative to the spread `baseline` of the initial population.
///
/// `pm = ceiling * exp(-decay * std / baseline)`, clamped to
/// `[floor, ceiling]`. Pressure rises as the population collapses and falls
/// while it is still diverse.
pub fn mutation_probability(std: f64, baseline: f64, config: &MutationConfig) -> f64 {
    let ratio = std / baseline;
    if ratio.is_nan() {
        return config.floor;
    }
    (config.ceiling * (-config.decay * ratio).exp()).clamp(config.floor, config.ceiling)
}

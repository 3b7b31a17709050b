//! Fitness statistics and the logistic selection-weight transform.
//!
//! Raw fitness is mapped to a weight `1 / (1 + exp((mean - f) / std))`, a
//! sigmoid centred on the population mean with spread equal to the population
//! standard deviation. Weights are strictly positive and bounded in `(0, 1)`,
//! which keeps proportionate selection well defined for negative or wildly
//! scaled objectives.

/// Largest exponent fed to `exp` so the weight stays a positive normal float.
const MAX_EXPONENT: f64 = 700.0;

/// Streaming mean and variance accumulator (Welford).
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningMoments {
    count: usize,
    mean: f64,
    m2: f64,
}

impl RunningMoments {
    /// Fold one observation into the running moments.
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Number of observations.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Running mean, `0.0` when empty.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance (divides by `n`).
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Standard deviation, defaulting to `1.0` when the variance is not
    /// positive so downstream divisions stay finite.
    pub fn std(&self) -> f64 {
        let variance = self.variance();
        if variance > 0.0 { variance.sqrt() } else { 1.0 }
    }
}

/// Summary of one scaling pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessScale {
    /// Mean raw fitness.
    pub mean: f64,
    /// Standard deviation of raw fitness (`1.0` if degenerate).
    pub std: f64,
    /// Sum of all scaled weights.
    pub sum: f64,
}

/// Logistic weight of a single raw fitness value.
pub fn logistic_weight(fitness: f64, mean: f64, std: f64) -> f64 {
    let z = (mean - fitness) / std;
    if z.is_nan() {
        return 0.5;
    }
    1.0 / (1.0 + z.clamp(-MAX_EXPONENT, MAX_EXPONENT).exp())
}

/// Compute moments of `raw` in one streaming pass and write the scaled
/// weights into `weights` (resized to match).
pub fn scale_weights(raw: &[f64], weights: &mut Vec<f64>) -> FitnessScale {
    let mut moments = RunningMoments::default();
    for &f in raw {
        moments.push(f);
    }

    let mean = moments.mean();
    let std = moments.std();

    weights.clear();
    weights.extend(raw.iter().map(|&f| logistic_weight(f, mean, std)));
    let sum = weights.iter().sum();

    FitnessScale { mean, std, sum }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_running_moments() {
        let mut m = RunningMoments::default();
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            m.push(v);
        }
        assert_eq!(m.count(), 8);
        assert!((m.mean() - 5.0).abs() < 1e-12);
        assert!((m.variance() - 4.0).abs() < 1e-12);
        assert!((m.std() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_std_defaults_to_one() {
        let mut m = RunningMoments::default();
        assert_eq!(m.std(), 1.0);
        m.push(3.0);
        m.push(3.0);
        assert_eq!(m.variance(), 0.0);
        assert_eq!(m.std(), 1.0);
    }

    #[test]
    fn test_equal_fitness_gives_equal_weights() {
        let mut weights = Vec::new();
        let scale = scale_weights(&[-4.0, -4.0, -4.0], &mut weights);
        assert_eq!(scale.std, 1.0);
        assert!(weights.iter().all(|&w| (w - 0.5).abs() < 1e-12));
        assert!((scale.sum - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_negative_fitness_weights_positive() {
        let mut weights = Vec::new();
        scale_weights(&[-1e6, -10.0, -0.5], &mut weights);
        assert!(weights.iter().all(|&w| w > 0.0 && w < 1.0));
        assert!(weights[0] < weights[1] && weights[1] < weights[2]);
    }

    #[test]
    fn test_extreme_outlier_stays_positive() {
        assert!(logistic_weight(-1e300, 0.0, 1.0) > 0.0);
        assert!(logistic_weight(1e300, 0.0, 1.0) <= 1.0);
        assert_eq!(logistic_weight(f64::NAN, 0.0, 1.0), 0.5);
    }

    proptest! {
        #[test]
        fn prop_weights_positive_and_monotonic(
            raw in prop::collection::vec(-1000i32..1000, 2..64)
        ) {
            let raw: Vec<f64> = raw.into_iter().map(f64::from).collect();
            let mut weights = Vec::new();
            let scale = scale_weights(&raw, &mut weights);

            prop_assert_eq!(weights.len(), raw.len());
            prop_assert!(weights.iter().all(|&w| w > 0.0 && w < 1.0));

            let sum: f64 = weights.iter().sum();
            prop_assert!((sum - scale.sum).abs() <= 1e-9 * sum.max(1.0));

            for i in 0..raw.len() {
                for j in 0..raw.len() {
                    if raw[i] > raw[j] {
                        prop_assert!(weights[i] > weights[j]);
                    }
                }
            }
        }

        #[test]
        fn prop_streaming_matches_two_pass(
            raw in prop::collection::vec(-1e3f64..1e3, 1..128)
        ) {
            let mut m = RunningMoments::default();
            for &f in &raw {
                m.push(f);
            }
            let n = raw.len() as f64;
            let mean = raw.iter().sum::<f64>() / n;
            let var = raw.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / n;
            prop_assert!((m.mean() - mean).abs() < 1e-9);
            prop_assert!((m.variance() - var).abs() < 1e-6);
        }
    }
}

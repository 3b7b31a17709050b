//! The generational evolution engine.

use log::{debug, info, trace};

use crate::schema::{
    ConfigError, EngineConfig, EvolveConfig, EvolveOutcome, GenerationStats, StopReason,
};

use super::entity::Entity;
use super::mutation::mutation_probability;
use super::rng::EngineRng;
use super::scaling::{FitnessScale, scale_weights};
use super::selection::{ParentPair, select_pair};

/// Entities of one generation with their raw fitness, index-aligned.
#[derive(Debug, Clone)]
struct Generation<E> {
    entities: Vec<E>,
    fitness: Vec<f64>,
}

impl<E: Entity> Generation<E> {
    fn with_capacity(n: usize) -> Self {
        Self {
            entities: Vec::with_capacity(n),
            fitness: Vec::with_capacity(n),
        }
    }

    fn evaluate(&mut self) {
        self.fitness.clear();
        self.fitness.extend(self.entities.iter().map(Entity::fitness));
    }
}

/// Genetic algorithm over a fixed-size population of caller-defined entities.
///
/// Each [`step`](Self::step) breeds a full generation into a scratch buffer:
/// parents are picked by [`select_pair`] over logistic fitness weights, the
/// offspring is their crossover, and with the adaptive probability
/// [`mutation_probability`] the offspring is replaced by its mutation. The
/// scratch generation is evaluated and then swapped in, so an operator that
/// panics leaves the engine in its pre-step state.
///
/// The elite is the best entity ever evaluated and only changes on a strict
/// fitness improvement.
#[derive(Debug)]
pub struct Engine<E: Entity> {
    config: EngineConfig,
    rng: EngineRng,
    population: Generation<E>,
    offspring: Generation<E>,
    weights: Vec<f64>,
    scale: FitnessScale,
    baseline_std: f64,
    mutation_probability: f64,
    elite: E,
    elite_fitness: f64,
    generation: usize,
}

impl<E: Entity> Engine<E> {
    /// Create an engine with `population_size` entities drawn from
    /// `generator`, seeded from entropy.
    pub fn new<G>(population_size: usize, generator: G) -> Result<Self, ConfigError>
    where
        G: FnMut(&EngineRng) -> E,
    {
        Self::with_config(EngineConfig::with_population_size(population_size), generator)
    }

    /// Create an engine from a full configuration.
    pub fn with_config<G>(config: EngineConfig, mut generator: G) -> Result<Self, ConfigError>
    where
        G: FnMut(&EngineRng) -> E,
    {
        config.validate()?;

        let n = config.population_size;
        let rng = EngineRng::from_seed(config.random_seed);

        let mut population = Generation::with_capacity(n);
        population.entities.extend((0..n).map(|_| generator(&rng)));
        population.evaluate();

        let mut weights = Vec::with_capacity(n);
        let scale = scale_weights(&population.fitness, &mut weights);
        let baseline_std = scale.std;

        let (best, elite_fitness) =
            improvement(&population.fitness, f64::NEG_INFINITY).unwrap_or((0, f64::NEG_INFINITY));
        let elite = population.entities[best].clone();

        let mutation_probability = mutation_probability(scale.std, baseline_std, &config.mutation);

        debug!(
            "Initialized population of {}: elite={:.6}, mean={:.6}, std={:.6}",
            n, elite_fitness, scale.mean, scale.std
        );

        Ok(Self {
            config,
            rng,
            population,
            offspring: Generation::with_capacity(n),
            weights,
            scale,
            baseline_std,
            mutation_probability,
            elite,
            elite_fitness,
            generation: 0,
        })
    }

    /// The best entity found so far.
    pub fn elite(&self) -> &E {
        &self.elite
    }

    /// Fitness of the elite.
    pub fn fitness(&self) -> f64 {
        self.elite_fitness
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Shared random source, the same one operators receive.
    pub fn rng(&self) -> &EngineRng {
        &self.rng
    }

    /// Current population.
    pub fn population(&self) -> &[E] {
        &self.population.entities
    }

    /// Raw fitness of the current population, index-aligned with
    /// [`population`](Self::population).
    pub fn raw_fitness(&self) -> &[f64] {
        &self.population.fitness
    }

    /// Scaled selection weights, index-aligned with
    /// [`population`](Self::population).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of the scaled selection weights.
    pub fn weight_sum(&self) -> f64 {
        self.scale.sum
    }

    /// Generations completed since construction.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Mutation probability used by the next step.
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Snapshot of the current generation.
    pub fn stats(&self) -> GenerationStats {
        GenerationStats {
            generation: self.generation,
            elite_fitness: self.elite_fitness,
            mean_fitness: self.scale.mean,
            fitness_std: self.scale.std,
            baseline_std: self.baseline_std,
            mutation_probability: self.mutation_probability,
            weight_sum: self.scale.sum,
        }
    }

    /// Draw a parent pair from the current population.
    pub fn select_parents(&self) -> ParentPair {
        select_pair(
            &self.weights,
            self.scale.sum,
            self.rng.rand_float(),
            self.rng.rand_float(),
        )
    }

    /// Advance one generation and return the elite with its fitness.
    pub fn step(&mut self) -> (&E, f64) {
        self.breed();
        self.offspring.evaluate();
        std::mem::swap(&mut self.population, &mut self.offspring);
        self.adjust();
        self.generation += 1;

        debug!(
            "Generation {}: elite={:.6}, mean={:.6}, std={:.6}, pm={:.4}",
            self.generation,
            self.elite_fitness,
            self.scale.mean,
            self.scale.std,
            self.mutation_probability
        );

        (&self.elite, self.elite_fitness)
    }

    /// Run until the elite has not improved for `patience` consecutive
    /// generations or `max_iterations` generations have run.
    pub fn evolve(
        &mut self,
        patience: usize,
        max_iterations: usize,
    ) -> Result<EvolveOutcome<E>, ConfigError> {
        self.evolve_with_callback(EvolveConfig::new(patience, max_iterations), |_| {})
    }

    /// [`evolve`](Self::evolve) with a callback invoked after every
    /// generation.
    pub fn evolve_with_callback<F>(
        &mut self,
        config: EvolveConfig,
        mut callback: F,
    ) -> Result<EvolveOutcome<E>, ConfigError>
    where
        F: FnMut(&GenerationStats),
    {
        config.validate()?;

        let mut best = self.elite_fitness;
        let mut stale = 0;
        let mut generations = 0;

        while stale < config.patience && generations < config.max_iterations {
            let (_, fitness) = self.step();
            generations += 1;

            if fitness > best {
                best = fitness;
                stale = 0;
            } else {
                stale += 1;
            }

            callback(&self.stats());
        }

        let stop_reason = if stale >= config.patience {
            StopReason::Converged
        } else {
            StopReason::MaxIterations
        };

        info!(
            "Evolution stopped ({:?}) after {} generations: elite fitness {:.6}",
            stop_reason, generations, self.elite_fitness
        );

        Ok(EvolveOutcome {
            elite: self.elite.clone(),
            fitness: self.elite_fitness,
            converged: stop_reason == StopReason::Converged,
            generations,
            stop_reason,
        })
    }

    /// Fill the scratch generation with offspring of the current one.
    fn breed(&mut self) {
        let Self {
            rng,
            population,
            offspring,
            weights,
            scale,
            mutation_probability,
            ..
        } = self;

        offspring.entities.clear();
        for _ in 0..population.entities.len() {
            let pair = select_pair(weights, scale.sum, rng.rand_float(), rng.rand_float());
            let parent = &population.entities[pair.first];
            let other = &population.entities[pair.second];

            let mut child = parent.crossover(other, pair.blend, rng);
            if rng.chance(*mutation_probability) {
                child = child.mutate(rng);
            }
            offspring.entities.push(child);
        }
    }

    /// Rescale the freshly swapped-in population and update the elite.
    fn adjust(&mut self) {
        self.scale = scale_weights(&self.population.fitness, &mut self.weights);

        if let Some((i, fitness)) = improvement(&self.population.fitness, self.elite_fitness) {
            trace!(
                "Elite improved at generation {}: {:.6} -> {:.6}",
                self.generation + 1,
                self.elite_fitness,
                fitness
            );
            self.elite = self.population.entities[i].clone();
            self.elite_fitness = fitness;
        }

        self.mutation_probability =
            mutation_probability(self.scale.std, self.baseline_std, &self.config.mutation);
    }
}

/// Index and value of the first maximum strictly above `floor`.
fn improvement(fitness: &[f64], floor: f64) -> Option<(usize, f64)> {
    let mut best = None;
    let mut best_fitness = floor;
    for (i, &f) in fitness.iter().enumerate() {
        if f > best_fitness {
            best = Some(i);
            best_fitness = f;
        }
    }
    best.map(|i| (i, best_fitness))
}

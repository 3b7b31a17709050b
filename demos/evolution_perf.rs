//! Quick evolution performance test

use adaptive_ga::{
    Engine, EngineConfig, EvolveConfig,
    problems::{IntegerProgram, Rosenbrock, Sphere},
};
use std::time::Instant;

fn main() {
    println!("=== Evolution Performance Test ===\n");

    // Throughput of a fixed number of generations at different sizes
    for pop_size in [100, 1_000, 10_000] {
        let config = EngineConfig {
            population_size: pop_size,
            random_seed: Some(42),
            ..Default::default()
        };

        let start = Instant::now();
        let mut engine = Engine::with_config(config, Sphere::random).unwrap();
        for _ in 0..100 {
            engine.step();
        }
        let elapsed = start.elapsed();

        let total_evals = (engine.generation() + 1) * pop_size;
        let evals_per_sec = total_evals as f64 / elapsed.as_secs_f64();

        println!("Population {}:", pop_size);
        println!("  Generations:    {}", engine.generation());
        println!("  Evaluations:    {}", total_evals);
        println!("  Elapsed:        {:.3}s", elapsed.as_secs_f64());
        println!("  Evals/sec:      {:.1}", evals_per_sec);
        println!("  Elite fitness:  {:.6}", engine.fitness());
        println!();
    }

    println!("=== Convergence Test (patience 32) ===\n");

    let evolve = EvolveConfig::new(32, 100_000);
    let config = EngineConfig {
        population_size: 500,
        random_seed: Some(42),
        ..Default::default()
    };

    let start = Instant::now();
    let mut engine = Engine::with_config(config.clone(), IntegerProgram::random).unwrap();
    let outcome = engine.evolve_with_callback(evolve, |_| {}).unwrap();
    println!(
        "Integer program: fitness {:.1} in {} generations ({:.2}s, converged={})",
        outcome.fitness,
        outcome.generations,
        start.elapsed().as_secs_f64(),
        outcome.converged
    );

    let start = Instant::now();
    let mut engine = Engine::with_config(config, Rosenbrock::random).unwrap();
    let outcome = engine.evolve_with_callback(evolve, |_| {}).unwrap();
    println!(
        "Rosenbrock: fitness {:.6} at ({:.4}, {:.4}) in {} generations ({:.2}s, converged={})",
        outcome.fitness,
        outcome.elite.x,
        outcome.elite.y,
        outcome.generations,
        start.elapsed().as_secs_f64(),
        outcome.converged
    );
}

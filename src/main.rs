//! Adaptive GA CLI - Run a built-in problem from JSON configuration.

use std::fmt::Debug;
use std::fs;
use std::path::Path;
use std::time::Instant;

use adaptive_ga::{
    Engine, EngineRng, Entity, RunConfig,
    problems::{IntegerProgram, LinearProgram, ProblemKind, Rosenbrock, Sphere},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <problem> [run.json]", args[0]);
        eprintln!();
        eprintln!("Evolve a built-in problem with the adaptive genetic algorithm.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  problem   One of: sphere, linear, integer, rosenbrock");
        eprintln!("  run.json  Path to run configuration (default: built-in defaults)");
        eprintln!();
        eprintln!("Print an example configuration with --example.");
        std::process::exit(1);
    }

    let problem: ProblemKind = args[1].parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let config = match args.get(2) {
        Some(path) => load_config(Path::new(path)),
        None => RunConfig::default(),
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    println!("Adaptive GA");
    println!("===========");
    println!("Problem: {} (optimum {:.6})", problem.name(), problem.optimum());
    println!("Population: {}", config.engine.population_size);
    println!(
        "Patience: {}, max iterations: {}",
        config.evolve.patience, config.evolve.max_iterations
    );
    println!();

    match problem {
        ProblemKind::Sphere => run(&config, Sphere::random),
        ProblemKind::LinearProgram => run(&config, LinearProgram::random),
        ProblemKind::IntegerProgram => run(&config, IntegerProgram::random),
        ProblemKind::Rosenbrock => run(&config, Rosenbrock::random),
    }
}

fn load_config(path: &Path) -> RunConfig {
    let config_str = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    })
}

fn run<E, G>(config: &RunConfig, generator: G)
where
    E: Entity + Debug,
    G: FnMut(&EngineRng) -> E,
{
    let mut engine = Engine::with_config(config.engine.clone(), generator).unwrap_or_else(|e| {
        eprintln!("Error creating engine: {}", e);
        std::process::exit(1);
    });

    println!("Initial elite fitness: {:.6}", engine.fitness());
    println!("Running evolution...");

    let start = Instant::now();
    let report_every = (config.evolve.max_iterations / 10).max(1);

    let outcome = engine
        .evolve_with_callback(config.evolve, |stats| {
            if stats.generation % report_every == 0 {
                println!(
                    "  Generation {}: elite={:.6}, mean={:.6}, std={:.6}, pm={:.4}",
                    stats.generation,
                    stats.elite_fitness,
                    stats.mean_fitness,
                    stats.fitness_std,
                    stats.mutation_probability
                );
            }
        })
        .unwrap_or_else(|e| {
            eprintln!("Error running evolution: {}", e);
            std::process::exit(1);
        });

    let elapsed = start.elapsed();

    println!();
    println!("Result:");
    println!("  Elite: {:?}", outcome.elite);
    println!("  Fitness: {:.6}", outcome.fitness);
    println!("  Converged: {}", outcome.converged);
    println!("  Generations: {}", outcome.generations);
    println!(
        "Time: {:.2}s ({:.1} generations/s)",
        elapsed.as_secs_f32(),
        outcome.generations as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_config() {
    let config = RunConfig::default();

    println!("Example configuration (run.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}

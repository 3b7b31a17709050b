//! End-to-end convergence on the built-in problems.

use adaptive_ga::{
    Engine, EngineConfig, Entity, StopReason,
    problems::{IntegerProgram, LinearProgram, Rosenbrock, Sphere},
};

fn seeded(population_size: usize, seed: u64) -> EngineConfig {
    EngineConfig {
        population_size,
        random_seed: Some(seed),
        ..Default::default()
    }
}

/// Elite, returned fitness, and engine accessors must agree after a run.
fn assert_consistent<E: Entity + std::fmt::Debug>(engine: &Engine<E>, elite: &E, fitness: f64) {
    assert!((fitness - elite.fitness()).abs() < 1e-10);
    assert!((fitness - engine.fitness()).abs() < 1e-10);
    assert!((engine.elite().fitness() - fitness).abs() < 1e-10);
}

#[test]
fn test_linear_program_converges() {
    let mut engine = Engine::with_config(seeded(1000, 2024), LinearProgram::random).unwrap();
    let outcome = engine.evolve(30, 10_000).unwrap();

    assert_consistent(&engine, &outcome.elite, outcome.fitness);
    assert!(outcome.converged, "did not converge: {:?}", outcome.stop_reason);
    assert_eq!(outcome.stop_reason, StopReason::Converged);
    assert!(outcome.elite.violation() == 0.0);
    assert!(
        outcome.fitness >= LinearProgram::OPTIMUM - 0.1,
        "fitness({:.4}): {:.4}",
        LinearProgram::OPTIMUM,
        outcome.fitness
    );
}

#[test]
fn test_sphere_minimum() {
    let mut engine = Engine::with_config(seeded(100, 7), Sphere::random).unwrap();
    let outcome = engine.evolve(32, 100_000).unwrap();

    assert_consistent(&engine, &outcome.elite, outcome.fitness);
    assert!(outcome.converged);
    assert!(outcome.fitness >= -1e-2, "fitness(0): {}", outcome.fitness);
    assert!(outcome.elite.x.abs() <= 0.05, "x(0): {}", outcome.elite.x);
    assert!(outcome.elite.y.abs() <= 0.05, "y(0): {}", outcome.elite.y);
}

#[test]
fn test_rosenbrock_valley() {
    let mut engine = Engine::with_config(seeded(1000, 1), Rosenbrock::random).unwrap();
    let outcome = engine.evolve(32, 100_000).unwrap();

    assert_consistent(&engine, &outcome.elite, outcome.fitness);
    assert!(outcome.converged);
    assert!(outcome.fitness >= -1e-2, "fitness(0): {}", outcome.fitness);
    assert!((outcome.elite.x - 1.0).abs() <= 0.1, "x(1): {}", outcome.elite.x);
    assert!((outcome.elite.y - 1.0).abs() <= 0.1, "y(1): {}", outcome.elite.y);
}

#[test]
fn test_integer_program() {
    let mut engine = Engine::with_config(seeded(500, 11), IntegerProgram::random).unwrap();
    let outcome = engine.evolve(32, 100_000).unwrap();

    assert_consistent(&engine, &outcome.elite, outcome.fitness);
    assert!(outcome.converged);
    assert!(
        outcome.fitness >= IntegerProgram::OPTIMUM - 5.0,
        "fitness(40): {}",
        outcome.fitness
    );
    assert_eq!(outcome.elite.x, outcome.elite.x.round());
    assert_eq!(outcome.elite.y, outcome.elite.y.round());
}

#[test]
fn test_two_entity_population() {
    let mut engine = Engine::with_config(seeded(2, 3), Sphere::random).unwrap();
    let mut prev = engine.fitness();

    for _ in 0..500 {
        let pair = engine.select_parents();
        assert!(pair.first < 2 && pair.second < 2);
        assert!((0.0..=1.0).contains(&pair.blend));

        let (_, fitness) = engine.step();
        assert!(fitness >= prev);
        prev = fitness;

        assert_eq!(engine.population().len(), 2);
        assert!(engine.weights().iter().all(|&w| w > 0.0));
    }
}

#[test]
fn test_evolve_is_deterministic_for_seed() {
    let run = || {
        let mut engine = Engine::with_config(seeded(200, 555), Sphere::random).unwrap();
        let outcome = engine.evolve(16, 2_000).unwrap();
        (outcome.fitness, outcome.generations, outcome.elite)
    };
    assert_eq!(run(), run());
}

#[test]
fn test_resumed_evolve_keeps_elite() {
    let mut engine = Engine::with_config(seeded(100, 8), Sphere::random).unwrap();
    let first = engine.evolve(8, 50).unwrap();
    let second = engine.evolve(8, 50).unwrap();

    assert!(second.fitness >= first.fitness);
    assert_eq!(
        engine.generation(),
        first.generations + second.generations
    );
}

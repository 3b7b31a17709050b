//! Solve a small linear program with penalty-shaped fitness.
//!
//! ```text
//! max  2x + 3y
//! s.t. 4x + 3y <= 10
//!      3x + 5y <= 12
//!      x, y >= 0
//! ```
//!
//! Run with `RUST_LOG=debug` to see per-generation statistics.

use adaptive_ga::{ConfigError, Engine, problems::LinearProgram};

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let mut engine = Engine::new(1000, LinearProgram::random)?;
    let outcome = engine.evolve(30, 10_000)?;

    println!("fitness:     {:.6}", outcome.fitness);
    println!("optimum:     {:.6}", LinearProgram::OPTIMUM);
    println!("elite:       x={:.4}, y={:.4}", outcome.elite.x, outcome.elite.y);
    println!("converged:   {}", outcome.converged);
    println!("generations: {}", outcome.generations);

    Ok(())
}

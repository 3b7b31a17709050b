//! Built-in benchmark problems.
//!
//! Each problem is a two-dimensional [`Entity`](crate::compute::Entity) with
//! a `random` constructor usable as the engine's seed generator:
//!
//! - [`Sphere`]: maximize `-(x² + y²)`
//! - [`LinearProgram`]: a continuous LP with penalty-shaped constraints
//! - [`IntegerProgram`]: an integer LP on a lattice
//! - [`Rosenbrock`]: the banana function

mod integer;
mod linear;
mod rosenbrock;
mod sphere;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use integer::IntegerProgram;
pub use linear::LinearProgram;
pub use rosenbrock::Rosenbrock;
pub use sphere::Sphere;

/// Weighted blend biased toward `a`.
fn blend(a: f64, b: f64, weight: f64) -> f64 {
    weight * a + (1.0 - weight) * b
}

/// Selector for the built-in problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    Sphere,
    LinearProgram,
    IntegerProgram,
    Rosenbrock,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 4] = [
        ProblemKind::Sphere,
        ProblemKind::LinearProgram,
        ProblemKind::IntegerProgram,
        ProblemKind::Rosenbrock,
    ];

    /// Short name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ProblemKind::Sphere => "sphere",
            ProblemKind::LinearProgram => "linear",
            ProblemKind::IntegerProgram => "integer",
            ProblemKind::Rosenbrock => "rosenbrock",
        }
    }

    /// Best achievable fitness.
    pub fn optimum(self) -> f64 {
        match self {
            ProblemKind::Sphere | ProblemKind::Rosenbrock => 0.0,
            ProblemKind::LinearProgram => LinearProgram::OPTIMUM,
            ProblemKind::IntegerProgram => IntegerProgram::OPTIMUM,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown problem '{0}' (expected sphere, linear, integer or rosenbrock)")]
pub struct UnknownProblem(pub String);

impl FromStr for ProblemKind {
    type Err = UnknownProblem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProblemKind::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownProblem(s.to_string()))
    }
}

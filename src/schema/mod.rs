//! Schema module - Configuration and reporting types for the evolution engine.

mod config;
mod report;

pub use config::*;
pub use report::*;

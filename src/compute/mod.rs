//! Compute module - Selection, scaling, and the generational loop.

mod engine;
mod entity;
mod mutation;
mod rng;
mod scaling;
mod selection;

pub use engine::*;
pub use entity::*;
pub use mutation::*;
pub use rng::*;
pub use scaling::*;
pub use selection::*;

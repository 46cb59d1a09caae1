//! Core application primitives (pipeline, engine)

pub mod analysis;
pub mod engine;

pub use analysis::*;
pub use engine::*;

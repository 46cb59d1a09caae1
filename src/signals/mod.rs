//! Confidence scoring and signal interpretation.

pub mod scoring;
pub mod signal_generator;

pub use scoring::*;
pub use signal_generator::*;

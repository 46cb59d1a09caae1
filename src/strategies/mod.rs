//! Trading strategy recommendation.

pub mod error;
pub mod generator;

pub use error::StrategyError;
pub use generator::*;

//! Multi-timeframe price target ranges.

pub mod targets;

pub use targets::*;

//! Volatility indicators

pub mod annualized;

pub use annualized::*;

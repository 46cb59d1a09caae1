//! Trend indicators: EMA, SMA, market phase

pub mod ema;
pub mod phase;
pub mod sma;

pub use ema::*;
pub use phase::*;
pub use sma::*;

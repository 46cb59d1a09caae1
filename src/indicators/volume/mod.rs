//! Volume indicators: OBV trend, volume ratio

pub mod obv;
pub mod ratio;

pub use obv::*;
pub use ratio::*;

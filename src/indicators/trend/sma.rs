//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Mean of the last `period` values, or of all values when fewer exist.
/// An empty input (or a zero period) gives 0.
pub fn calculate_sma(prices: &[f64], period: usize) -> f64 {
    math::mean(math::tail(prices, period)).unwrap_or(0.0)
}

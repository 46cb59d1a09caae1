//! Support and Resistance levels

use crate::common::math;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportResistance {
    pub support: f64,
    pub resistance: f64,
}

/// Quantile estimate over the whole window.
///
/// Sorts the prices ascending; support is the value at `floor(n * 0.25)`,
/// resistance the value at `floor(n * 0.75)`. This is not a peak/trough
/// detector. Returns `None` for an empty series.
pub fn calculate_support_resistance(prices: &[f64]) -> Option<SupportResistance> {
    Some(SupportResistance {
        support: math::quantile(prices, 0.25)?,
        resistance: math::quantile(prices, 0.75)?,
    })
}

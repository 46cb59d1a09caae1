//! Stochastic RSI: RSI normalized into its own recent range.

use crate::indicators::momentum::rsi::calculate_rsi;
use tracing::debug;

/// Neutral reading returned whenever the RSI range is degenerate.
pub const STOCH_RSI_NEUTRAL: f64 = 50.0;

/// Calculate Stochastic RSI on a 0 - 100 scale.
///
/// An RSI is computed for every window of `period + 1` prices; the latest
/// RSI is placed inside the min/max of those values. A zero or non-finite
/// range (flat prices, too little data) returns 50.
pub fn calculate_stoch_rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return STOCH_RSI_NEUTRAL;
    }

    let rsi_values: Vec<f64> = prices
        .windows(period + 1)
        .filter_map(|window| calculate_rsi(window, period))
        .collect();

    let (min, max) = rsi_values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let latest = rsi_values.last().copied().unwrap_or(f64::NAN);
    let range = max - min;

    if range == 0.0 || !range.is_finite() || !latest.is_finite() {
        debug!(range = range, "StochRSI range degenerate, returning neutral");
        return STOCH_RSI_NEUTRAL;
    }

    ((latest - min) / range * 100.0).clamp(0.0, 100.0)
}

//! Annualized volatility from daily log returns

use crate::common::math;
use crate::indicators::validation::log_returns;

const TRADING_DAYS: f64 = 365.0;

/// Standard deviation of `ln(p[i] / p[i-1])` over the window,
/// scaled by `sqrt(365)` and expressed in percent.
///
/// Fewer than two prices give 0.
pub fn calculate_volatility(prices: &[f64]) -> f64 {
    let returns = log_returns(prices);
    let std = math::standard_deviation(&returns).unwrap_or(0.0);
    std * TRADING_DAYS.sqrt() * 100.0
}

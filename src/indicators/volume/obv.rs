//! On-Balance Volume

use crate::models::indicators::ObvTrend;

const TREND_WINDOW: usize = 5;

/// Cumulative OBV, one value per price. Volume is added on an up-tick,
/// subtracted on a down-tick and carried on no change.
pub fn calculate_obv(prices: &[f64], volumes: &[f64]) -> Vec<f64> {
    let mut obv = Vec::with_capacity(prices.len());
    let mut running = 0.0;
    for (i, volume) in volumes.iter().enumerate().take(prices.len()) {
        if i > 0 {
            if prices[i] > prices[i - 1] {
                running += volume;
            } else if prices[i] < prices[i - 1] {
                running -= volume;
            }
        }
        obv.push(running);
    }
    obv
}

/// Bullish when the last OBV of the latest 5 exceeds the first of them.
pub fn obv_trend(prices: &[f64], volumes: &[f64]) -> ObvTrend {
    let obv = calculate_obv(prices, volumes);
    let window = &obv[obv.len().saturating_sub(TREND_WINDOW)..];
    match (window.first(), window.last()) {
        (Some(first), Some(last)) if last > first => ObvTrend::Bullish,
        _ => ObvTrend::Bearish,
    }
}

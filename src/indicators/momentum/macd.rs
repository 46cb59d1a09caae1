//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::ema::ema_series;
use crate::models::indicators::MacdIndicator;

/// Histogram magnitude below which momentum counts as weak is
/// `max(MIN_STRENGTH_THRESHOLD, |macd| * RELATIVE_STRENGTH_THRESHOLD)`.
pub const MIN_STRENGTH_THRESHOLD: f64 = 0.01;
pub const RELATIVE_STRENGTH_THRESHOLD: f64 = 0.1;
/// Line/signal gap under which a reversal is flagged.
pub const REVERSAL_GAP: f64 = 0.1;

/// Calculate MACD over the full aligned series.
///
/// MACD line = EMA(fast) - EMA(slow), point by point
/// Signal = EMA(signal) of the whole MACD line
/// Histogram = last MACD - last Signal
pub fn calculate_macd(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdIndicator> {
    if prices.is_empty() {
        return None;
    }

    let fast = ema_series(prices, fast_period);
    let slow = ema_series(prices, slow_period);
    let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_line = ema_series(&macd_line, signal_period);

    let value = *macd_line.last()?;
    let signal = *signal_line.last()?;

    Some(MacdIndicator {
        value,
        signal,
        histogram: value - signal,
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(prices: &[f64]) -> Option<MacdIndicator> {
    calculate_macd(prices, 12, 26, 9)
}

/// Describe the momentum, trend and reversal state of a MACD reading.
pub fn interpret_macd(macd: &MacdIndicator) -> String {
    let threshold = MIN_STRENGTH_THRESHOLD.max(macd.value.abs() * RELATIVE_STRENGTH_THRESHOLD);

    let mut text = if macd.histogram > threshold {
        "Strong bullish momentum".to_string()
    } else if macd.histogram > 0.0 {
        "Weak bullish momentum".to_string()
    } else if macd.histogram < -threshold {
        "Strong bearish momentum".to_string()
    } else if macd.histogram < 0.0 {
        "Weak bearish momentum".to_string()
    } else {
        "Neutral momentum".to_string()
    };

    if macd.value > 0.0 && macd.signal > 0.0 {
        text.push_str(" in an upward trend");
    } else if macd.value < 0.0 && macd.signal < 0.0 {
        text.push_str(" in a downward trend");
    }

    if (macd.value - macd.signal).abs() < REVERSAL_GAP {
        text.push_str(", potential trend reversal");
    }

    text
}

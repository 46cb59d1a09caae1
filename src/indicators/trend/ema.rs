//! EMA (Exponential Moving Average) indicator

/// EMA over the whole input, one value per input point.
///
/// The first value seeds the average; multiplier = 2 / (period + 1).
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = match values.first() {
        Some(&first) => first,
        None => return out,
    };
    out.push(prev);
    for &x in &values[1..] {
        prev = (x - prev) * multiplier + prev;
        out.push(prev);
    }
    out
}

/// Latest EMA value for a period.
pub fn calculate_ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).last().copied()
}

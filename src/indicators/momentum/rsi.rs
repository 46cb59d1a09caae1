//! RSI (Relative Strength Index) indicator

/// Calculate Wilder's smoothed RSI.
///
/// The averages are seeded from the first `period` deltas, then each
/// later delta is folded in with `avg = (avg * (period - 1) + x) / period`.
///
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss
///
/// Returns `None` when fewer than `period + 1` prices are available.
/// A window with no gains and no losses yields NaN; callers guard it.
pub fn calculate_rsi(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period + 1 {
        return None;
    }

    let deltas: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let (seed, rest) = deltas.split_at(period);

    let mut avg_gain = seed.iter().filter(|d| **d > 0.0).sum::<f64>() / period as f64;
    let mut avg_loss = seed.iter().filter(|d| **d < 0.0).map(|d| -d).sum::<f64>() / period as f64;

    let smoothing = (period - 1) as f64;
    for &delta in rest {
        let gain = if delta > 0.0 { delta } else { 0.0 };
        let loss = if delta < 0.0 { -delta } else { 0.0 };
        avg_gain = (avg_gain * smoothing + gain) / period as f64;
        avg_loss = (avg_loss * smoothing + loss) / period as f64;
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(prices: &[f64]) -> Option<f64> {
    calculate_rsi(prices, 14)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

pub fn rsi_zone(rsi: f64) -> RsiZone {
    if rsi > 70.0 {
        RsiZone::Overbought
    } else if rsi < 30.0 {
        RsiZone::Oversold
    } else {
        RsiZone::Neutral
    }
}

/// Human-readable reading of an RSI value.
pub fn interpret_rsi(rsi: f64) -> String {
    match rsi_zone(rsi) {
        RsiZone::Overbought => format!("RSI at {:.2} indicates overbought conditions", rsi),
        RsiZone::Oversold => format!("RSI at {:.2} indicates oversold conditions", rsi),
        RsiZone::Neutral => format!("RSI at {:.2} is in neutral territory", rsi),
    }
}

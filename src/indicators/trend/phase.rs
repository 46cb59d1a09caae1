//! Market phase classification from price / moving-average relationships.

use crate::common::math;
use crate::models::market::{KeyLevels, MarketPhase, MarketPhaseKind};
use crate::models::series::HistoricalSeries;

/// Relative distances are scaled by this before clamping strength to 1.
const STRENGTH_SCALE: f64 = 10.0;

/// Four-way phase decision over (price > MA50, price > MA200, MA50 > MA200).
///
/// | p>50 | p>200 | 50>200 | phase        |
/// |------|-------|--------|--------------|
/// | T    | T     | T      | Bull Market  |
/// | F    | F     | F      | Bear Market  |
/// | F    | T     | *      | Correction   |
/// | any other            || Accumulation |
pub fn determine_market_phase(price: f64, ma50: f64, ma200: f64) -> MarketPhaseKind {
    let above_ma50 = price > ma50;
    let above_ma200 = price > ma200;
    let golden = ma50 > ma200;

    match (above_ma50, above_ma200, golden) {
        (true, true, true) => MarketPhaseKind::BullMarket,
        (false, false, false) => MarketPhaseKind::BearMarket,
        (false, true, _) => MarketPhaseKind::Correction,
        _ => MarketPhaseKind::Accumulation,
    }
}

/// Classify the phase and derive its strength, confidence and key levels.
///
/// Strength grows with the distance between price and both averages and
/// between the averages themselves. Key levels are quantiles of the
/// window (10/25/75/90%) around a classic pivot `(high + low + close) / 3`.
pub fn classify_market_phase(series: &HistoricalSeries, ma50: f64, ma200: f64) -> MarketPhase {
    let price = series.current_price;
    let phase = determine_market_phase(price, ma50, ma200);

    let distance = (relative(price, ma50).abs()
        + relative(price, ma200).abs()
        + relative(ma50, ma200).abs())
        / 3.0;
    let strength = (distance * STRENGTH_SCALE).clamp(0.0, 1.0);

    let confidence = match phase {
        MarketPhaseKind::BullMarket | MarketPhaseKind::BearMarket => 60.0 + strength * 35.0,
        MarketPhaseKind::Correction | MarketPhaseKind::Accumulation => 40.0 + strength * 30.0,
    };

    MarketPhase {
        phase,
        strength: math::round_to(strength, 4),
        confidence: math::round_to(confidence, 2),
        key_levels: key_levels(&series.prices, price),
    }
}

fn key_levels(prices: &[f64], price: f64) -> KeyLevels {
    let level = |fraction| math::quantile(prices, fraction).unwrap_or(price);
    let high = prices.iter().copied().fold(price, f64::max);
    let low = prices.iter().copied().fold(price, f64::min);

    KeyLevels {
        strong_support: level(0.10),
        support: level(0.25),
        pivot: (high + low + price) / 3.0,
        resistance: level(0.75),
        strong_resistance: level(0.90),
    }
}

fn relative(value: f64, base: f64) -> f64 {
    if base > 0.0 && value.is_finite() {
        (value - base) / base
    } else {
        0.0
    }
}

//! Price target calculator
//!
//! Each horizon combines a volatility-driven range with a
//! support/resistance-driven range, biases it by momentum, then keeps the
//! bounds near the support/resistance levels. Longer horizons are wider
//! and more momentum-sensitive; their confidence decays.

use serde::{Deserialize, Serialize};

use crate::models::prediction::{PriceTarget, PriceTargets, Timeframe};
use crate::signals::scoring::clamp_confidence;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetInputs {
    pub current_price: f64,
    /// Annualized volatility in percent.
    pub volatility: f64,
    pub sma20: f64,
    pub sma50: f64,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    /// Short-term base confidence, 30 - 95.
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy)]
struct HorizonProfile {
    volatility_multiplier: f64,
    range_multiplier: f64,
    momentum_multiplier: f64,
    support_fraction: f64,
    resistance_fraction: f64,
    time_decay: f64,
}

fn profile(timeframe: Timeframe) -> HorizonProfile {
    match timeframe {
        Timeframe::Short => HorizonProfile {
            volatility_multiplier: 0.1,
            range_multiplier: 0.2,
            momentum_multiplier: 1.0,
            support_fraction: 1.0,
            resistance_fraction: 1.0,
            time_decay: 1.0,
        },
        Timeframe::Mid => HorizonProfile {
            volatility_multiplier: 0.2,
            range_multiplier: 0.4,
            momentum_multiplier: 2.0,
            support_fraction: 0.95,
            resistance_fraction: 1.05,
            time_decay: 0.9,
        },
        Timeframe::Long => HorizonProfile {
            volatility_multiplier: 0.3,
            range_multiplier: 0.6,
            momentum_multiplier: 3.0,
            support_fraction: 0.9,
            resistance_fraction: 1.1,
            time_decay: 0.8,
        },
    }
}

/// `(SMA20 - SMA50) / SMA50`, or 0 without a usable SMA50.
pub fn momentum(sma20: f64, sma50: f64) -> f64 {
    if sma50 > 0.0 && sma20.is_finite() {
        (sma20 - sma50) / sma50
    } else {
        0.0
    }
}

fn market_condition_multiplier(momentum: f64) -> f64 {
    if momentum > 0.0 {
        1.1
    } else if momentum < 0.0 {
        0.9
    } else {
        1.0
    }
}

/// Range and confidence for one horizon.
///
/// The range is centred on the current price, so with non-negative
/// volatility `low <= current_price <= high` always holds: momentum only
/// stretches the side it points to, and the support/resistance clamps
/// never move a bound across the current price.
pub fn compute_target(inputs: &TargetInputs, timeframe: Timeframe) -> PriceTarget {
    let p = profile(timeframe);
    let price = inputs.current_price;

    let volatility_range = price * (inputs.volatility.max(0.0) / 100.0) * p.volatility_multiplier;
    let level_range = match (inputs.support, inputs.resistance) {
        (Some(support), Some(resistance)) => (resistance - support).abs() * p.range_multiplier,
        _ => 0.0,
    };
    // The summed range is the total band width, split evenly around price.
    let half_width = (volatility_range + level_range) / 2.0;

    let mut low = price - half_width;
    let mut high = price + half_width;

    let trend = momentum(inputs.sma20, inputs.sma50);
    let bias = price * trend * p.momentum_multiplier;
    if bias > 0.0 {
        high += bias;
    } else {
        low += bias;
    }

    if let Some(support) = inputs.support.filter(|s| *s > 0.0) {
        low = low.max(support * p.support_fraction);
    }
    if let Some(resistance) = inputs.resistance.filter(|r| *r > 0.0) {
        high = high.min(resistance * p.resistance_fraction);
    }

    let confidence =
        clamp_confidence(inputs.confidence * p.time_decay * market_condition_multiplier(trend));

    PriceTarget {
        low: low.min(price).max(0.0),
        high: high.max(price),
        confidence,
    }
}

pub fn compute_price_targets(inputs: &TargetInputs) -> PriceTargets {
    PriceTargets {
        short_term: compute_target(inputs, Timeframe::Short),
        mid_term: compute_target(inputs, Timeframe::Mid),
        long_term: compute_target(inputs, Timeframe::Long),
    }
}

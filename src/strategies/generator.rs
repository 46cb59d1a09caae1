//! Single-pass strategy generator
//!
//! Takes a market snapshot and produces a recommendation with entry,
//! stop-loss and target levels, a holding timeframe and a rationale.

use tracing::{debug, warn};

use crate::common::math;
use crate::indicators::momentum::{interpret_macd, interpret_rsi};
use crate::models::indicators::TechnicalIndicators;
use crate::models::market::MarketPhase;
use crate::models::strategy::{
    Entries, Recommendation, StopLoss, StrategySnapshot, Targets, TradingStrategy,
};
use crate::signals::scoring::clamp_confidence;
use crate::signals::signal_generator::assess_trend;
use crate::strategies::error::StrategyError;

const TREND_WEIGHT: f64 = 0.4;
const MARKET_WEIGHT: f64 = 0.3;
const MOMENTUM_WEIGHT: f64 = 0.3;
/// Added when MACD direction agrees with a Buy/Sell call.
const MACD_AGREEMENT_BONUS: f64 = 8.0;
/// Confidence floor for a Take Profit call on overbought RSI.
const RSI_EXTREME_FLOOR: f64 = 90.0;

const STOP_MULTIPLIERS: (f64, f64, f64) = (2.0, 3.0, 5.0);
const TARGET_MULTIPLIERS: (f64, f64, f64) = (3.0, 5.0, 8.0);
const MAX_CONSERVATIVE_DISCOUNT: f64 = 0.05;
const MAX_AGGRESSIVE_PREMIUM: f64 = 0.03;
const AGGRESSIVE_FALLBACK: f64 = 1.02;

/// Build the generator input from a computed snapshot and phase.
pub fn snapshot_from(indicators: &TechnicalIndicators, phase: &MarketPhase) -> StrategySnapshot {
    let trend = assess_trend(indicators);
    StrategySnapshot {
        current_price: Some(indicators.current_price),
        rsi: indicators.rsi,
        macd: indicators.macd,
        trend: trend.direction.as_str().to_string(),
        trend_strength: trend.strength,
        market_phase: phase.phase.as_str().to_string(),
        market_strength: phase.strength,
        volatility: indicators.volatility,
        support: indicators.support,
        resistance: indicators.resistance,
    }
}

/// Generate a trading strategy.
///
/// A missing, zero, negative or non-finite current price is an error.
/// Any other failure is logged and answered with
/// [`TradingStrategy::fallback`] instead of an error.
pub fn generate_strategy(snapshot: &StrategySnapshot) -> Result<TradingStrategy, StrategyError> {
    let price = match snapshot.current_price {
        Some(p) if p.is_finite() && p > 0.0 => p,
        other => {
            warn!(price = ?other, "Strategy requested without a valid current price");
            return Err(StrategyError::InvalidPrice(other));
        }
    };

    match build_strategy(snapshot, price) {
        Ok(strategy) => {
            debug!(
                recommendation = %strategy.recommendation,
                confidence = strategy.confidence,
                "Strategy generated"
            );
            Ok(strategy)
        }
        Err(e) => {
            warn!(error = %e, "Strategy generation failed, returning default strategy");
            Ok(TradingStrategy::fallback())
        }
    }
}

fn build_strategy(snapshot: &StrategySnapshot, price: f64) -> Result<TradingStrategy, StrategyError> {
    require_finite(snapshot.rsi, "rsi")?;
    require_finite(snapshot.macd.value, "macd")?;
    require_finite(snapshot.macd.signal, "macd signal")?;
    require_finite(snapshot.trend_strength, "trend strength")?;
    require_finite(snapshot.market_strength, "market strength")?;
    require_finite(snapshot.volatility, "volatility")?;

    let trend = snapshot.trend.to_lowercase();
    let phase = snapshot.market_phase.to_lowercase();

    let (recommendation, overbought_exit) = recommend(snapshot, &trend, &phase);
    let confidence = score(snapshot, recommendation, overbought_exit);

    let entries = entries(snapshot, price);
    let stop_loss = stop_loss(snapshot, price);
    let targets = targets(snapshot, &phase, price);

    for (value, field) in [
        (entries.conservative, "conservative entry"),
        (entries.aggressive, "aggressive entry"),
        (stop_loss.wide, "stop loss"),
        (targets.final_target, "target"),
    ] {
        require_finite(value, field)?;
    }

    Ok(TradingStrategy {
        recommendation,
        confidence,
        entries,
        stop_loss,
        targets,
        timeframe: holding_timeframe(snapshot, &phase).to_string(),
        rationale: rationale(snapshot),
    })
}

fn require_finite(value: f64, field: &'static str) -> Result<f64, StrategyError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StrategyError::NonFinite(field))
    }
}

/// Ordered rules, first match wins. The flag marks an overbought Take Profit.
fn recommend(snapshot: &StrategySnapshot, trend: &str, phase: &str) -> (Recommendation, bool) {
    let rsi = snapshot.rsi;
    let bullish = trend.contains("bullish");
    let bearish = trend.contains("bearish");
    let macd_bullish = snapshot.macd.value > snapshot.macd.signal;
    let macd_bearish = snapshot.macd.value < snapshot.macd.signal;

    if rsi > 70.0 && bullish {
        (Recommendation::TakeProfit, true)
    } else if rsi < 30.0 && bearish {
        (Recommendation::Buy, false)
    } else if bullish && (macd_bullish || rsi > 55.0) {
        (Recommendation::Buy, false)
    } else if bearish && (macd_bearish || rsi < 45.0) {
        (Recommendation::Sell, false)
    } else if phase.contains("accumulation") {
        (Recommendation::Buy, false)
    } else if phase.contains("distribution") {
        (Recommendation::Sell, false)
    } else {
        (Recommendation::Hold, false)
    }
}

fn score(snapshot: &StrategySnapshot, recommendation: Recommendation, overbought_exit: bool) -> f64 {
    let mut momentum = if snapshot.rsi > 50.0 { 60.0 } else { 40.0 };
    if snapshot.macd.value > 0.0 {
        momentum += 10.0;
    } else if snapshot.macd.value < 0.0 {
        momentum -= 10.0;
    }

    let mut confidence = snapshot.trend_strength * 100.0 * TREND_WEIGHT
        + snapshot.market_strength * 100.0 * MARKET_WEIGHT
        + momentum * MOMENTUM_WEIGHT;

    let macd_agrees = match recommendation {
        Recommendation::Buy => snapshot.macd.value > snapshot.macd.signal,
        Recommendation::Sell => snapshot.macd.value < snapshot.macd.signal,
        Recommendation::Hold | Recommendation::TakeProfit => false,
    };
    if macd_agrees {
        confidence += MACD_AGREEMENT_BONUS;
    }
    if overbought_exit {
        confidence = confidence.max(RSI_EXTREME_FLOOR);
    }

    math::round_to(clamp_confidence(confidence), 2)
}

fn entries(snapshot: &StrategySnapshot, price: f64) -> Entries {
    let swing = snapshot.volatility / 100.0;

    let discounted = price * (1.0 - swing.min(MAX_CONSERVATIVE_DISCOUNT));
    let conservative = snapshot.support.map_or(discounted, |s| s.max(discounted));

    let premium = price * (1.0 + swing.min(MAX_AGGRESSIVE_PREMIUM));
    let mut aggressive = snapshot.resistance.map_or(premium, |r| premium.min(r));
    if aggressive == 0.0 || !aggressive.is_finite() {
        aggressive = price * AGGRESSIVE_FALLBACK;
    }

    Entries {
        conservative,
        moderate: price,
        aggressive,
    }
}

fn stop_loss(snapshot: &StrategySnapshot, price: f64) -> StopLoss {
    let level = |multiplier: f64| price * (1.0 - snapshot.market_strength * multiplier / 100.0);
    let (tight, normal, wide) = STOP_MULTIPLIERS;
    StopLoss {
        tight: level(tight),
        normal: level(normal),
        wide: level(wide),
    }
}

fn targets(snapshot: &StrategySnapshot, phase: &str, price: f64) -> Targets {
    let trend_multiplier = if phase.contains("bull") {
        1.5
    } else if phase.contains("bear") {
        0.5
    } else {
        1.0
    };
    let level = |base: f64| {
        price * (1.0 + snapshot.market_strength * trend_multiplier * base / 100.0)
    };
    let (primary, secondary, final_target) = TARGET_MULTIPLIERS;
    Targets {
        primary: level(primary),
        secondary: level(secondary),
        final_target: level(final_target),
    }
}

fn holding_timeframe(snapshot: &StrategySnapshot, phase: &str) -> &'static str {
    let strong = snapshot.market_strength > 0.7;
    let volatility = snapshot.volatility;

    if phase.contains("bull") && strong {
        if volatility > 50.0 {
            "Short-term"
        } else {
            "Medium-term"
        }
    } else if phase.contains("bear") && strong {
        "Long-term"
    } else if phase.contains("accumulation") {
        "Medium-term"
    } else if phase.contains("distribution") {
        "Short-term"
    } else if volatility > 50.0 {
        "Short-term"
    } else if volatility < 20.0 {
        "Long-term"
    } else {
        "Medium-term"
    }
}

fn rationale(snapshot: &StrategySnapshot) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} phase with {:.0}% strength",
            snapshot.market_phase,
            snapshot.market_strength * 100.0
        ),
        interpret_rsi(snapshot.rsi),
        interpret_macd(&snapshot.macd),
    ];

    if let Some(support) = snapshot.support {
        lines.push(format!("Support level at {:.2}", support));
    }
    if let Some(resistance) = snapshot.resistance {
        lines.push(format!("Resistance level at {:.2}", resistance));
    }
    if snapshot.trend_strength > 0.7 {
        lines.push(format!("Strong {} trend", snapshot.trend));
    }

    lines
}

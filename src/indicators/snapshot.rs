//! Full indicator snapshot for one series.

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::indicators::momentum::{calculate_macd, calculate_rsi, calculate_stoch_rsi};
use crate::indicators::structure::calculate_support_resistance;
use crate::indicators::trend::{calculate_sma, determine_market_phase};
use crate::indicators::volatility::calculate_volatility;
use crate::indicators::volume::{calculate_volume_ratio, obv_trend};
use crate::models::indicators::{MacdIndicator, TechnicalIndicators};
use crate::models::series::HistoricalSeries;

/// RSI reported when it cannot be computed (flat or single-point series).
pub const RSI_NEUTRAL: f64 = 50.0;

/// Compute every indicator for a series.
///
/// Short series degrade instead of failing: the RSI period shrinks to the
/// available deltas and moving averages use whatever points exist.
pub fn compute_indicators(series: &HistoricalSeries, config: &EngineConfig) -> TechnicalIndicators {
    let prices = &series.prices;

    let rsi = best_effort_rsi(prices, config.rsi_period);
    let macd = calculate_macd(prices, config.macd_fast, config.macd_slow, config.macd_signal)
        .unwrap_or(MacdIndicator {
            value: 0.0,
            signal: 0.0,
            histogram: 0.0,
        });

    let ma20 = calculate_sma(prices, config.ma_short);
    let ma50 = calculate_sma(prices, config.ma_mid);
    let ma200 = calculate_sma(prices, config.ma_long);
    if prices.len() < config.ma_long {
        debug!(
            count = prices.len(),
            required = config.ma_long,
            "Long moving average computed over a shortened window"
        );
    }

    let levels = calculate_support_resistance(prices);

    TechnicalIndicators {
        current_price: series.current_price,
        price_change_24h: series.price_change_24h,
        rsi,
        stoch_rsi: calculate_stoch_rsi(prices, config.stoch_rsi_period),
        macd,
        ma20,
        ma50,
        ma200,
        volume_change: calculate_volume_ratio(&series.volumes, config.volume_period),
        obv_trend: obv_trend(prices, &series.volumes),
        market_phase: determine_market_phase(series.current_price, ma50, ma200),
        volatility: calculate_volatility(prices),
        support: levels.map(|l| l.support),
        resistance: levels.map(|l| l.resistance),
    }
}

fn best_effort_rsi(prices: &[f64], period: usize) -> f64 {
    let effective = period.min(prices.len().saturating_sub(1));
    if effective < period {
        debug!(period = period, effective = effective, "RSI period shortened to available data");
    }
    match calculate_rsi(prices, effective) {
        Some(rsi) if rsi.is_finite() => rsi,
        other => {
            warn!(rsi = ?other, "RSI undefined for this window, using neutral value");
            RSI_NEUTRAL
        }
    }
}

//! Turns an indicator snapshot into an ordered list of readable signals.

use serde::{Deserialize, Serialize};

use crate::indicators::momentum::{interpret_macd, interpret_rsi};
use crate::models::indicators::{ObvTrend, TechnicalIndicators};
use crate::models::signal::Signal;
use crate::signals::scoring::macd_confidence;

const TREND_STRENGTH_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Neutral,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Bullish => "bullish",
            TrendDirection::Bearish => "bearish",
            TrendDirection::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendAssessment {
    pub direction: TrendDirection,
    /// 0.0 - 1.0
    pub strength: f64,
}

/// Moving-average trend: price stacked above MA20 above MA50 is bullish,
/// the reverse stack bearish. Strength follows the MA20/MA50 spread.
pub fn assess_trend(indicators: &TechnicalIndicators) -> TrendAssessment {
    let price = indicators.current_price;
    let (ma20, ma50) = (indicators.ma20, indicators.ma50);

    let direction = if price > ma20 && ma20 > ma50 {
        TrendDirection::Bullish
    } else if price < ma20 && ma20 < ma50 {
        TrendDirection::Bearish
    } else {
        TrendDirection::Neutral
    };

    let strength = if ma50 > 0.0 {
        ((ma20 - ma50).abs() / ma50 * TREND_STRENGTH_SCALE).clamp(0.0, 1.0)
    } else {
        0.0
    };

    TrendAssessment { direction, strength }
}

pub fn generate_signals(indicators: &TechnicalIndicators) -> Vec<Signal> {
    let mut signals = Vec::with_capacity(6);

    signals.push(Signal::new(
        "RSI",
        indicators.rsi,
        interpret_rsi(indicators.rsi),
        (indicators.rsi - 50.0).abs() / 50.0,
    ));

    signals.push(Signal::new(
        "MACD",
        indicators.macd.histogram,
        interpret_macd(&indicators.macd),
        macd_confidence(&indicators.macd) / 100.0,
    ));

    let stoch = indicators.stoch_rsi;
    let stoch_text = if stoch > 80.0 {
        format!("Stochastic RSI at {:.2} is overbought", stoch)
    } else if stoch < 20.0 {
        format!("Stochastic RSI at {:.2} is oversold", stoch)
    } else {
        format!("Stochastic RSI at {:.2} is neutral", stoch)
    };
    signals.push(Signal::new("Stochastic RSI", stoch, stoch_text, (stoch - 50.0).abs() / 50.0));

    let (obv_value, obv_text) = match indicators.obv_trend {
        ObvTrend::Bullish => (1.0, "On-balance volume rising, buyers in control"),
        ObvTrend::Bearish => (-1.0, "On-balance volume falling, sellers in control"),
    };
    signals.push(Signal::new("OBV", obv_value, obv_text, 0.6));

    let ratio = indicators.volume_change;
    let volume_text = if ratio > 1.5 {
        format!("Volume surge at {:.2}x the recent average", ratio)
    } else if ratio < 0.7 {
        format!("Volume drying up at {:.2}x the recent average", ratio)
    } else {
        format!("Volume near average at {:.2}x", ratio)
    };
    signals.push(Signal::new("Volume", ratio, volume_text, (ratio - 1.0).abs()));

    let trend = assess_trend(indicators);
    let trend_text = match trend.direction {
        TrendDirection::Bullish => format!(
            "Price above MA20 ({:.2}) and MA50 ({:.2}), uptrend",
            indicators.ma20, indicators.ma50
        ),
        TrendDirection::Bearish => format!(
            "Price below MA20 ({:.2}) and MA50 ({:.2}), downtrend",
            indicators.ma20, indicators.ma50
        ),
        TrendDirection::Neutral => "Moving averages mixed, no clear trend".to_string(),
    };
    signals.push(Signal::new(
        "Moving Averages",
        indicators.ma20 - indicators.ma50,
        trend_text,
        trend.strength,
    ));

    signals
}

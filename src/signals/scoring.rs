//! Confidence scoring: five sub-scores blended into one 0 - 100 value.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::indicators::{MacdIndicator, TechnicalIndicators};
use crate::models::sentiment::NewsSentiment;

pub const CONFIDENCE_FLOOR: f64 = 30.0;
pub const CONFIDENCE_CEILING: f64 = 95.0;

/// Sub-score weights. Volatility is a multiplier, not a weight.
pub struct ConfidenceWeights;

impl ConfidenceWeights {
    pub const RSI: f64 = 0.25;
    pub const MACD: f64 = 0.25;
    pub const VOLUME: f64 = 0.20;
    pub const SENTIMENT: f64 = 0.20;
}

/// Geometric decay applied to the short-term base per horizon.
const MID_TERM_DECAY: f64 = 0.9;
const LONG_TERM_DECAY: f64 = 0.8;

pub fn rsi_confidence(rsi: f64) -> f64 {
    if rsi > 70.0 || rsi < 30.0 {
        90.0
    } else if rsi > 60.0 || rsi < 40.0 {
        75.0
    } else {
        50.0
    }
}

pub fn macd_confidence(macd: &MacdIndicator) -> f64 {
    (macd.histogram.abs() / macd.signal.abs().max(0.01) * 100.0).min(100.0)
}

pub fn volume_confidence(volume_ratio: f64) -> f64 {
    if volume_ratio > 2.0 {
        90.0
    } else if volume_ratio > 1.5 {
        80.0
    } else if volume_ratio > 1.0 {
        70.0
    } else if volume_ratio > 0.7 {
        50.0
    } else {
        30.0
    }
}

/// Mean of news and social scores; a missing score counts as 50.
pub fn sentiment_confidence(sentiment: &NewsSentiment) -> f64 {
    let news = sentiment.news_score.unwrap_or(50.0);
    let social = sentiment.social_score.unwrap_or(50.0);
    (news + social) / 2.0
}

pub fn volatility_factor(volatility: f64) -> f64 {
    (1.0 - volatility / 100.0).max(0.5)
}

/// Clamp into the confidence band. Non-finite values read as the floor.
pub fn clamp_confidence(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
    } else {
        CONFIDENCE_FLOOR
    }
}

/// Short-term confidence for an indicator snapshot, always within [30, 95].
pub fn score_confidence(indicators: &TechnicalIndicators, sentiment: &NewsSentiment) -> f64 {
    let weighted = rsi_confidence(indicators.rsi) * ConfidenceWeights::RSI
        + macd_confidence(&indicators.macd) * ConfidenceWeights::MACD
        + volume_confidence(indicators.volume_change) * ConfidenceWeights::VOLUME
        + sentiment_confidence(sentiment) * ConfidenceWeights::SENTIMENT;

    let score = weighted * volatility_factor(indicators.volatility);
    if !score.is_finite() {
        warn!(score = score, "Confidence score not finite, using floor");
    }
    clamp_confidence(score)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeConfidence {
    pub short_term: f64,
    pub mid_term: f64,
    pub long_term: f64,
}

/// Decay a short-term base confidence across the longer horizons.
pub fn timeframe_confidence(base: f64) -> TimeframeConfidence {
    TimeframeConfidence {
        short_term: base,
        mid_term: (base * MID_TERM_DECAY).max(CONFIDENCE_FLOOR),
        long_term: (base * LONG_TERM_DECAY).max(CONFIDENCE_FLOOR),
    }
}

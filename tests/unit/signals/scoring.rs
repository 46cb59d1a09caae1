//! Unit tests for confidence scoring

use cryptoscope::models::indicators::{MacdIndicator, ObvTrend, TechnicalIndicators};
use cryptoscope::models::market::MarketPhaseKind;
use cryptoscope::models::sentiment::{MarketMood, NewsSentiment};
use cryptoscope::signals::scoring::*;

fn indicators(rsi: f64, histogram: f64, signal: f64, volume: f64, volatility: f64) -> TechnicalIndicators {
    TechnicalIndicators {
        current_price: 100.0,
        price_change_24h: 0.0,
        rsi,
        stoch_rsi: 50.0,
        macd: MacdIndicator {
            value: signal + histogram,
            signal,
            histogram,
        },
        ma20: 100.0,
        ma50: 100.0,
        ma200: 100.0,
        volume_change: volume,
        obv_trend: ObvTrend::Bullish,
        market_phase: MarketPhaseKind::Accumulation,
        volatility,
        support: None,
        resistance: None,
    }
}

#[test]
fn test_rsi_confidence_steps() {
    assert_eq!(rsi_confidence(75.0), 90.0);
    assert_eq!(rsi_confidence(25.0), 90.0);
    assert_eq!(rsi_confidence(65.0), 75.0);
    assert_eq!(rsi_confidence(35.0), 75.0);
    assert_eq!(rsi_confidence(50.0), 50.0);
}

#[test]
fn test_macd_confidence() {
    let macd = MacdIndicator {
        value: 1.5,
        signal: 1.0,
        histogram: 0.5,
    };
    assert!((macd_confidence(&macd) - 50.0).abs() < 1e-12);

    // tiny signal is floored at 0.01, result capped at 100
    let macd = MacdIndicator {
        value: 0.5,
        signal: 0.0,
        histogram: 0.5,
    };
    assert_eq!(macd_confidence(&macd), 100.0);
}

#[test]
fn test_volume_confidence_steps() {
    assert_eq!(volume_confidence(2.5), 90.0);
    assert_eq!(volume_confidence(1.6), 80.0);
    assert_eq!(volume_confidence(1.2), 70.0);
    assert_eq!(volume_confidence(0.8), 50.0);
    assert_eq!(volume_confidence(0.5), 30.0);
}

#[test]
fn test_sentiment_confidence_defaults() {
    let partial = NewsSentiment {
        news_score: Some(80.0),
        social_score: None,
        market_mood: MarketMood::Bullish,
    };
    assert_eq!(sentiment_confidence(&partial), 65.0);
    assert_eq!(sentiment_confidence(&NewsSentiment::neutral()), 50.0);
}

#[test]
fn test_volatility_factor_floor() {
    assert_eq!(volatility_factor(20.0), 0.8);
    assert_eq!(volatility_factor(80.0), 0.5);
    assert_eq!(volatility_factor(0.0), 1.0);
}

#[test]
fn test_score_confidence_weighted() {
    // 90*0.25 + 50*0.25 + 70*0.2 + 50*0.2 = 59, times (1 - 10/100)
    let ind = indicators(75.0, 0.5, 1.0, 1.2, 10.0);
    let score = score_confidence(&ind, &NewsSentiment::neutral());
    assert!((score - 53.1).abs() < 1e-9);
}

#[test]
fn test_score_confidence_always_in_band() {
    let sentiments = [
        NewsSentiment::neutral(),
        NewsSentiment::new(0.0, 0.0, MarketMood::Bearish),
        NewsSentiment::new(100.0, 100.0, MarketMood::Bullish),
        NewsSentiment::new(1e6, 1e6, MarketMood::Bullish),
    ];
    for rsi in [0.0, 25.0, 50.0, 65.0, 100.0] {
        for histogram in [-50.0, 0.0, 0.3, 1e6] {
            for volume in [0.0, 0.8, 3.0] {
                for volatility in [0.0, 30.0, 500.0] {
                    for sentiment in &sentiments {
                        let ind = indicators(rsi, histogram, 0.2, volume, volatility);
                        let score = score_confidence(&ind, sentiment);
                        assert!((30.0..=95.0).contains(&score), "score {}", score);
                    }
                }
            }
        }
    }
}

#[test]
fn test_non_finite_confidence_reads_as_floor() {
    let ind = indicators(50.0, 0.1, 0.2, 1.0, 10.0);
    let broken = NewsSentiment::new(f64::NAN, 50.0, MarketMood::Neutral);
    assert_eq!(score_confidence(&ind, &broken), 30.0);
}

#[test]
fn test_timeframe_decay() {
    let tf = timeframe_confidence(80.0);
    assert_eq!(tf.short_term, 80.0);
    assert!((tf.mid_term - 72.0).abs() < 1e-9);
    assert!((tf.long_term - 64.0).abs() < 1e-9);

    let floor = timeframe_confidence(33.0);
    assert_eq!(floor.mid_term, 30.0);
    assert_eq!(floor.long_term, 30.0);
}

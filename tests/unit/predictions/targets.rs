//! Unit tests for the price target calculator

use cryptoscope::models::prediction::Timeframe;
use cryptoscope::predictions::targets::{compute_price_targets, compute_target, momentum, TargetInputs};

fn inputs(sma20: f64) -> TargetInputs {
    TargetInputs {
        current_price: 100.0,
        volatility: 60.0,
        sma20,
        sma50: 100.0,
        support: Some(90.0),
        resistance: Some(110.0),
        confidence: 70.0,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
}

#[test]
fn test_momentum() {
    assert_close(momentum(105.0, 100.0), 0.05);
    assert_eq!(momentum(105.0, 0.0), 0.0);
}

#[test]
fn test_bullish_targets_widen_with_horizon() {
    let targets = compute_price_targets(&inputs(105.0));

    assert_close(targets.short_term.low, 95.0);
    assert_close(targets.short_term.high, 110.0);
    assert_close(targets.short_term.confidence, 77.0);

    assert_close(targets.mid_term.low, 90.0);
    assert_close(targets.mid_term.high, 115.5);
    assert_close(targets.mid_term.confidence, 69.3);

    assert_close(targets.long_term.low, 85.0);
    assert_close(targets.long_term.high, 121.0);
    assert_close(targets.long_term.confidence, 61.6);
}

#[test]
fn test_bearish_momentum_stretches_low_side() {
    let target = compute_target(&inputs(95.0), Timeframe::Short);
    assert_close(target.low, 90.0);
    assert_close(target.high, 105.0);
    assert_close(target.confidence, 63.0);
}

#[test]
fn test_confidence_clamped() {
    let mut high = inputs(105.0);
    high.confidence = 95.0;
    assert_eq!(compute_target(&high, Timeframe::Short).confidence, 95.0);

    let mut low = inputs(95.0);
    low.confidence = 30.0;
    assert_eq!(compute_target(&low, Timeframe::Long).confidence, 30.0);
}

#[test]
fn test_current_price_always_inside_range() {
    for price in [50.0, 85.0, 100.0, 120.0, 400.0] {
        for volatility in [0.0, 15.0, 80.0, 300.0] {
            for sma20 in [60.0, 100.0, 140.0] {
                for (support, resistance) in [(Some(90.0), Some(110.0)), (None, None), (Some(0.0), Some(0.0))] {
                    let inputs = TargetInputs {
                        current_price: price,
                        volatility,
                        sma20,
                        sma50: 100.0,
                        support,
                        resistance,
                        confidence: 60.0,
                    };
                    let targets = compute_price_targets(&inputs);
                    for timeframe in Timeframe::ALL {
                        let target = targets.get(timeframe);
                        assert!(
                            target.contains(price),
                            "{:?} {:?} does not contain {}",
                            timeframe,
                            target,
                            price
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_timeframe_labels() {
    assert_eq!(Timeframe::Short.horizon_label(), "24H");
    assert_eq!(Timeframe::Long.horizon_label(), "30D");
    assert_eq!(Timeframe::Mid.term_label(), "Mid-term");
}

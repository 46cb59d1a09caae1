//! Unit tests for RSI indicator

use cryptoscope::indicators::momentum::{calculate_rsi, calculate_rsi_default, interpret_rsi, rsi_zone, RsiZone};

const SCENARIO: [f64; 10] = [100.0, 102.0, 101.0, 105.0, 107.0, 103.0, 108.0, 110.0, 106.0, 112.0];

fn zigzag(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + (i as f64 * 0.3) + if i % 3 == 0 { -2.0 } else { 1.5 })
        .collect()
}

#[test]
fn test_rsi_insufficient_data() {
    assert!(calculate_rsi(&SCENARIO, 10).is_none());
    assert!(calculate_rsi_default(&SCENARIO).is_none());
}

#[test]
fn test_rsi_seeded_and_smoothed() {
    // Seed over +2,-1,+4,+2,-4 gives 1.6 / 1.0, then Wilder smoothing
    // over +5,+2,-4,+6 ends at 2.62336 / 1.0496.
    let rsi = calculate_rsi(&SCENARIO, 5).unwrap();
    assert!((rsi - 71.42).abs() < 0.005, "rsi = {}", rsi);
}

#[test]
fn test_rsi_full_window_seed_only() {
    // 21 points of gain, 9 of loss across all nine deltas.
    let rsi = calculate_rsi(&SCENARIO, 9).unwrap();
    assert!((rsi - 70.0).abs() < 1e-9);
}

#[test]
fn test_rsi_bounded() {
    let prices = zigzag(120);
    for period in [2, 5, 14, 30] {
        let rsi = calculate_rsi(&prices, period).unwrap();
        assert!((0.0..=100.0).contains(&rsi), "period {} gave {}", period, rsi);
    }
}

#[test]
fn test_rsi_only_gains_is_100() {
    let prices: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    assert_eq!(calculate_rsi(&prices, 14), Some(100.0));
}

#[test]
fn test_rsi_flat_is_undefined() {
    let prices = vec![100.0; 20];
    assert!(calculate_rsi(&prices, 14).unwrap().is_nan());
}

#[test]
fn test_rsi_zones() {
    assert_eq!(rsi_zone(75.0), RsiZone::Overbought);
    assert_eq!(rsi_zone(25.0), RsiZone::Oversold);
    assert_eq!(rsi_zone(50.0), RsiZone::Neutral);
    assert!(interpret_rsi(75.0).contains("overbought"));
}

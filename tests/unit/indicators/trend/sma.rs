//! Unit tests for SMA indicator

use cryptoscope::indicators::trend::calculate_sma;

#[test]
fn test_sma_empty_is_zero() {
    assert_eq!(calculate_sma(&[], 20), 0.0);
}

#[test]
fn test_sma_last_period_values() {
    let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(calculate_sma(&prices, 2), 4.5);
    assert_eq!(calculate_sma(&prices, 5), 3.0);
}

#[test]
fn test_sma_period_longer_than_series() {
    let prices = [2.0, 4.0, 6.0];
    assert_eq!(calculate_sma(&prices, 200), 4.0);
}

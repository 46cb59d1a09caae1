//! Unit tests for EMA indicator

use cryptoscope::indicators::trend::{calculate_ema, ema_series};

#[test]
fn test_ema_seeded_with_first_value() {
    let ema = ema_series(&[1.0, 2.0, 3.0], 3);
    // multiplier 2 / (3 + 1) = 0.5
    assert_eq!(ema, vec![1.0, 1.5, 2.25]);
}

#[test]
fn test_ema_same_length_as_input() {
    let values: Vec<f64> = (0..50).map(|i| i as f64).collect();
    assert_eq!(ema_series(&values, 12).len(), 50);
    assert!(ema_series(&[], 12).is_empty());
}

#[test]
fn test_ema_latest_value() {
    assert_eq!(calculate_ema(&[4.0], 10), Some(4.0));
    assert!(calculate_ema(&[], 10).is_none());
}

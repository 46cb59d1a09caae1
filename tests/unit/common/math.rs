//! Unit tests for numeric helpers

use cryptoscope::common::math::{mean, quantile, round_to, standard_deviation, tail};

#[test]
fn test_mean_empty() {
    assert!(mean(&[]).is_none());
}

#[test]
fn test_standard_deviation_population() {
    let std = standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert!((std - 2.0).abs() < 1e-12);
}

#[test]
fn test_tail_shorter_than_period() {
    assert_eq!(tail(&[1.0, 2.0], 5), &[1.0, 2.0]);
    assert_eq!(tail(&[1.0, 2.0, 3.0], 2), &[2.0, 3.0]);
}

#[test]
fn test_quantile_uses_floor_index() {
    let values = [5.0, 1.0, 4.0, 2.0, 3.0];
    // sorted [1,2,3,4,5], floor(5 * 0.25) = 1
    assert_eq!(quantile(&values, 0.25), Some(2.0));
    assert_eq!(quantile(&values, 0.75), Some(4.0));
    assert_eq!(quantile(&[], 0.5), None);
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(71.4236, 2), 71.42);
    assert_eq!(round_to(0.125, 1), 0.1);
}

//! Unit tests for support/resistance quantiles

use cryptoscope::indicators::structure::calculate_support_resistance;

#[test]
fn test_support_resistance_quantiles() {
    let prices = [8.0, 3.0, 5.0, 1.0, 7.0, 2.0, 6.0, 4.0];
    let levels = calculate_support_resistance(&prices).unwrap();
    // sorted 1..=8, indices floor(8 * 0.25) = 2 and floor(8 * 0.75) = 6
    assert_eq!(levels.support, 3.0);
    assert_eq!(levels.resistance, 7.0);
}

#[test]
fn test_support_resistance_single_point() {
    let levels = calculate_support_resistance(&[42.0]).unwrap();
    assert_eq!(levels.support, 42.0);
    assert_eq!(levels.resistance, 42.0);
}

#[test]
fn test_support_resistance_empty() {
    assert!(calculate_support_resistance(&[]).is_none());
}

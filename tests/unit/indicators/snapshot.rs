//! End-to-end tests for the indicator snapshot

use cryptoscope::config::EngineConfig;
use cryptoscope::indicators::compute_indicators;
use cryptoscope::models::indicators::ObvTrend;
use cryptoscope::models::series::HistoricalSeries;

fn scenario() -> HistoricalSeries {
    HistoricalSeries::new(
        vec![100.0, 102.0, 101.0, 105.0, 107.0, 103.0, 108.0, 110.0, 106.0, 112.0],
        vec![1000.0; 10],
    )
}

#[test]
fn test_scenario_snapshot() {
    let indicators = compute_indicators(&scenario(), &EngineConfig::default());

    // RSI period shrinks from 14 to the nine available deltas.
    assert!((indicators.rsi - 70.0).abs() < 0.005);
    assert_eq!(indicators.obv_trend, ObvTrend::Bullish);
    assert_eq!(indicators.current_price, 112.0);
    assert!((indicators.ma20 - 105.4).abs() < 1e-9);
    assert_eq!(indicators.volume_change, 1.0);
    assert_eq!(indicators.support, Some(102.0));
    assert_eq!(indicators.resistance, Some(108.0));
    assert!((indicators.volatility - 61.63).abs() < 0.01);
}

#[test]
fn test_scenario_reduced_period_matches_hand_value() {
    let config = EngineConfig {
        rsi_period: 5,
        ..EngineConfig::default()
    };
    let indicators = compute_indicators(&scenario(), &config);
    assert!((indicators.rsi - 71.42).abs() < 0.005);
}

#[test]
fn test_flat_series_uses_neutral_fallbacks() {
    let series = HistoricalSeries::new(vec![50.0; 30], vec![10.0; 30]);
    let indicators = compute_indicators(&series, &EngineConfig::default());
    assert_eq!(indicators.rsi, 50.0);
    assert_eq!(indicators.stoch_rsi, 50.0);
    assert_eq!(indicators.volatility, 0.0);
    assert_eq!(indicators.macd.histogram, 0.0);
}

#[test]
fn test_single_point_series() {
    let series = HistoricalSeries::new(vec![50.0], vec![10.0]);
    let indicators = compute_indicators(&series, &EngineConfig::default());
    assert_eq!(indicators.rsi, 50.0);
    assert_eq!(indicators.ma200, 50.0);
    assert_eq!(indicators.volume_change, 1.0);
}

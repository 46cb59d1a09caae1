//! Unit tests for narrative prompt, parsing and fallback summary

use cryptoscope::models::indicators::{MacdIndicator, ObvTrend, TechnicalIndicators};
use cryptoscope::models::market::MarketPhaseKind;
use cryptoscope::models::sentiment::NewsSentiment;
use cryptoscope::services::narrative::{market_summary, parse_narrative, render_prompt};

fn indicators() -> TechnicalIndicators {
    TechnicalIndicators {
        current_price: 64250.5,
        price_change_24h: -1.25,
        rsi: 58.3,
        stoch_rsi: 40.0,
        macd: MacdIndicator {
            value: 120.0,
            signal: 80.0,
            histogram: 40.0,
        },
        ma20: 63000.0,
        ma50: 61000.0,
        ma200: 52000.0,
        volume_change: 1.1,
        obv_trend: ObvTrend::Bullish,
        market_phase: MarketPhaseKind::BullMarket,
        volatility: 45.2,
        support: Some(60000.0),
        resistance: None,
    }
}

#[test]
fn test_prompt_contains_template_and_data() {
    let prompt = render_prompt("BTC", &indicators(), &NewsSentiment::neutral());
    assert!(prompt.contains("SUMMARY:"));
    assert!(prompt.contains("SIGNALS:"));
    assert!(prompt.contains("STRATEGY:"));
    assert!(prompt.contains("Price: 64250.50 (-1.25% 24h)"));
    assert!(prompt.contains("Market phase: Bull Market"));
    assert!(prompt.contains("Support: 60000.00, Resistance: n/a"));
}

#[test]
fn test_parse_template_response() {
    let text = "\
**SUMMARY:** BTC holds above its 50-day average with steady momentum.
**SIGNALS:**
- RSI near 58, room to run
2. MACD histogram positive
* 50-day MA rising
**STRATEGY:** Accumulate on dips toward 60k.
Keep stops below 58k.";

    let parsed = parse_narrative(text).unwrap();
    assert_eq!(parsed.summary, "BTC holds above its 50-day average with steady momentum.");
    assert_eq!(
        parsed.signals,
        vec!["RSI near 58, room to run", "MACD histogram positive", "50-day MA rising"]
    );
    assert_eq!(
        parsed.strategy.as_deref(),
        Some("Accumulate on dips toward 60k.\nKeep stops below 58k.")
    );
}

#[test]
fn test_parse_without_summary_is_none() {
    assert!(parse_narrative("The market looks fine today.").is_none());
    assert!(parse_narrative("SUMMARY:\nSIGNALS:\n- something").is_none());
}

#[test]
fn test_parse_case_insensitive_labels() {
    let parsed = parse_narrative("summary: Quiet session.\nstrategy: Wait.").unwrap();
    assert_eq!(parsed.summary, "Quiet session.");
    assert!(parsed.signals.is_empty());
    assert_eq!(parsed.strategy.as_deref(), Some("Wait."));
}

#[test]
fn test_market_summary_fallback() {
    let summary = market_summary("BTC", &indicators());
    assert!(summary.starts_with("BTC is trading at 64250.50 (-1.25% 24h) in a Bull Market phase."));
    assert!(summary.contains("RSI 58.30"));
    assert!(summary.contains("strong bullish momentum"));
}

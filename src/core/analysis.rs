//! Synchronous analysis pipeline over one series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::indicators::error::SeriesError;
use crate::indicators::snapshot::compute_indicators;
use crate::indicators::trend::classify_market_phase;
use crate::models::indicators::TechnicalIndicators;
use crate::models::market::MarketPhase;
use crate::models::prediction::PriceTargets;
use crate::models::sentiment::{HeadlineSentiment, NewsHeadline, NewsSentiment};
use crate::models::series::HistoricalSeries;
use crate::models::signal::Signal;
use crate::models::strategy::TradingStrategy;
use crate::predictions::targets::{compute_price_targets, TargetInputs};
use crate::services::error::ProviderError;
use crate::services::narrative::{market_summary, ParsedNarrative};
use crate::services::sentiment::classify_headline;
use crate::signals::scoring::{score_confidence, timeframe_confidence, TimeframeConfidence};
use crate::signals::signal_generator::generate_signals;
use crate::strategies::error::StrategyError;
use crate::strategies::generator::{generate_strategy, snapshot_from};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to fetch history for {symbol}: {source}")]
    Upstream {
        symbol: String,
        source: ProviderError,
    },

    #[error("invalid price series: {0}")]
    InvalidSeries(#[from] SeriesError),

    #[error("strategy generation failed: {0}")]
    Strategy(#[from] StrategyError),
}

/// Everything produced for one analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub symbol: String,
    pub generated_at: DateTime<Utc>,
    pub indicators: TechnicalIndicators,
    pub market_phase: MarketPhase,
    pub confidence: TimeframeConfidence,
    pub price_targets: PriceTargets,
    pub strategy: TradingStrategy,
    pub signals: Vec<Signal>,
    pub sentiment: NewsSentiment,
    pub headlines: Vec<NewsHeadline>,
    /// Narrative summary when one was parsed, otherwise the numeric summary.
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<ParsedNarrative>,
}

/// Run the full numeric pipeline for a series.
///
/// Fails only on an invalid series or an unusable current price; every
/// other degenerate case resolves to its documented fallback.
pub fn analyze_series(
    symbol: &str,
    series: &HistoricalSeries,
    sentiment: &NewsSentiment,
    headlines: &[NewsHeadline],
    config: &EngineConfig,
) -> Result<AnalysisReport, AnalysisError> {
    series.validate()?;

    let indicators = compute_indicators(series, config);
    let market_phase = classify_market_phase(series, indicators.ma50, indicators.ma200);

    let base_confidence = score_confidence(&indicators, sentiment);
    let confidence = timeframe_confidence(base_confidence);

    let price_targets = compute_price_targets(&TargetInputs {
        current_price: indicators.current_price,
        volatility: indicators.volatility,
        sma20: indicators.ma20,
        sma50: indicators.ma50,
        support: indicators.support,
        resistance: indicators.resistance,
        confidence: base_confidence,
    });

    let mut strategy = generate_strategy(&snapshot_from(&indicators, &market_phase))?;
    if let Some(line) = headline_rationale(headlines) {
        strategy.rationale.push(line);
    }

    let signals = generate_signals(&indicators);
    let summary = market_summary(symbol, &indicators);

    info!(
        symbol = %symbol,
        points = series.len(),
        phase = %market_phase.phase,
        confidence = base_confidence,
        recommendation = %strategy.recommendation,
        "Analysis complete"
    );

    Ok(AnalysisReport {
        symbol: symbol.to_string(),
        generated_at: Utc::now(),
        indicators,
        market_phase,
        confidence,
        price_targets,
        strategy,
        signals,
        sentiment: *sentiment,
        headlines: headlines.to_vec(),
        summary,
        narrative: None,
    })
}

fn headline_rationale(headlines: &[NewsHeadline]) -> Option<String> {
    if headlines.is_empty() {
        return None;
    }
    let (positive, negative) = headlines
        .iter()
        .map(classify_headline)
        .fold((0, 0), |(p, n), s| match s {
            HeadlineSentiment::Positive => (p + 1, n),
            HeadlineSentiment::Negative => (p, n + 1),
            HeadlineSentiment::Neutral => (p, n),
        });
    debug!(positive = positive, negative = negative, "Headline tally");
    Some(format!(
        "News flow: {} positive and {} negative of {} headlines",
        positive,
        negative,
        headlines.len()
    ))
}

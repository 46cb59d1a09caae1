//! AI narrative: prompt rendering, response parsing and the numeric fallback.
//!
//! The generator must answer with the `SUMMARY:` / `SIGNALS:` /
//! `STRATEGY:` template rendered into the prompt. Anything that does not
//! yield a summary is discarded in favour of [`market_summary`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::indicators::momentum::interpret_macd;
use crate::models::indicators::TechnicalIndicators;
use crate::models::sentiment::NewsSentiment;
use crate::services::error::ProviderError;

pub const SUMMARY_LABEL: &str = "SUMMARY:";
pub const SIGNALS_LABEL: &str = "SIGNALS:";
pub const STRATEGY_LABEL: &str = "STRATEGY:";

#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedNarrative {
    pub summary: String,
    pub signals: Vec<String>,
    pub strategy: Option<String>,
}

pub fn render_prompt(symbol: &str, indicators: &TechnicalIndicators, sentiment: &NewsSentiment) -> String {
    let level = |v: Option<f64>| v.map_or("n/a".to_string(), |v| format!("{:.2}", v));
    let score = |v: Option<f64>| v.map_or("n/a".to_string(), |v| format!("{:.0}", v));

    format!(
        "Analyze {symbol} using the market data below.\n\
         Reply using exactly these sections:\n\
         {SUMMARY_LABEL} one sentence describing the market\n\
         {SIGNALS_LABEL}\n\
         - one technical signal per line\n\
         {STRATEGY_LABEL} a short trading strategy\n\
         \n\
         Price: {price:.2} ({change:+.2}% 24h)\n\
         RSI: {rsi:.2}\n\
         Stochastic RSI: {stoch:.2}\n\
         MACD: {macd:.4} / signal {signal:.4} / histogram {hist:.4}\n\
         MA20: {ma20:.2}, MA50: {ma50:.2}, MA200: {ma200:.2}\n\
         Volume ratio: {volume:.2}\n\
         OBV trend: {obv}\n\
         Market phase: {phase}\n\
         Volatility: {volatility:.2}%\n\
         Support: {support}, Resistance: {resistance}\n\
         News score: {news}, Social score: {social}, Mood: {mood:?}\n",
        price = indicators.current_price,
        change = indicators.price_change_24h,
        rsi = indicators.rsi,
        stoch = indicators.stoch_rsi,
        macd = indicators.macd.value,
        signal = indicators.macd.signal,
        hist = indicators.macd.histogram,
        ma20 = indicators.ma20,
        ma50 = indicators.ma50,
        ma200 = indicators.ma200,
        volume = indicators.volume_change,
        obv = indicators.obv_trend.as_str(),
        phase = indicators.market_phase,
        volatility = indicators.volatility,
        support = level(indicators.support),
        resistance = level(indicators.resistance),
        news = score(sentiment.news_score),
        social = score(sentiment.social_score),
        mood = sentiment.market_mood,
    )
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    None,
    Summary,
    Signals,
    Strategy,
}

/// Split a generator response into its template sections.
///
/// Labels are matched case-insensitively after stripping markdown
/// decoration (`#`, `*`). Returns `None` when no summary text is found.
pub fn parse_narrative(text: &str) -> Option<ParsedNarrative> {
    let mut section = Section::None;
    let mut summary = Vec::new();
    let mut signals = Vec::new();
    let mut strategy = Vec::new();

    for raw in text.lines() {
        let line = raw.trim().trim_matches(|c: char| c == '#' || c == '*').trim();
        if line.is_empty() {
            continue;
        }

        let (next, rest) = match split_label(line) {
            Some(found) => found,
            None => (section, line),
        };
        section = next;
        let rest = rest.trim_start_matches('*').trim();
        if rest.is_empty() {
            continue;
        }

        match section {
            Section::Summary => summary.push(rest.to_string()),
            Section::Signals => {
                let item = strip_bullet(rest);
                if !item.is_empty() {
                    signals.push(item.to_string());
                }
            }
            Section::Strategy => strategy.push(rest.to_string()),
            Section::None => {}
        }
    }

    let summary = summary.join(" ");
    if summary.is_empty() {
        return None;
    }

    Some(ParsedNarrative {
        summary,
        signals,
        strategy: if strategy.is_empty() {
            None
        } else {
            Some(strategy.join("\n"))
        },
    })
}

/// Remove a leading `-`, `*`, `•` or `1.` / `1)` list marker.
fn strip_bullet(item: &str) -> &str {
    if let Some(rest) = item.strip_prefix(['-', '*', '•']) {
        return rest.trim();
    }
    let digits = item.len() - item.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        if let Some(rest) = item[digits..].strip_prefix(['.', ')']) {
            return rest.trim();
        }
    }
    item
}

fn split_label(line: &str) -> Option<(Section, &str)> {
    let upper = line.to_ascii_uppercase();
    [
        (SUMMARY_LABEL, Section::Summary),
        (SIGNALS_LABEL, Section::Signals),
        (STRATEGY_LABEL, Section::Strategy),
    ]
    .into_iter()
    .find(|(label, _)| upper.starts_with(label))
    .map(|(label, section)| (section, &line[label.len()..]))
}

/// Deterministic summary built from the indicators alone.
pub fn market_summary(symbol: &str, indicators: &TechnicalIndicators) -> String {
    format!(
        "{} is trading at {:.2} ({:+.2}% 24h) in a {} phase. RSI {:.2}, {}, annualized volatility {:.2}%.",
        symbol,
        indicators.current_price,
        indicators.price_change_24h,
        indicators.market_phase,
        indicators.rsi,
        interpret_macd(&indicators.macd).to_lowercase(),
        indicators.volatility,
    )
}

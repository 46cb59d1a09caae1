//! Trading strategy recommendation models

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::indicators::MacdIndicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
    #[serde(rename = "Take Profit")]
    TakeProfit,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Buy => "Buy",
            Recommendation::Sell => "Sell",
            Recommendation::Hold => "Hold",
            Recommendation::TakeProfit => "Take Profit",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entries {
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopLoss {
    pub tight: f64,
    pub normal: f64,
    pub wide: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    pub primary: f64,
    pub secondary: f64,
    #[serde(rename = "final")]
    pub final_target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingStrategy {
    pub recommendation: Recommendation,
    /// 0 - 100, rounded to 2 decimals
    pub confidence: f64,
    pub entries: Entries,
    pub stop_loss: StopLoss,
    pub targets: Targets,
    pub timeframe: String,
    pub rationale: Vec<String>,
}

impl TradingStrategy {
    /// Advisory placeholder returned when strategy generation fails
    /// internally: Hold at 50% with zeroed, price-independent levels.
    pub fn fallback() -> Self {
        Self {
            recommendation: Recommendation::Hold,
            confidence: 50.0,
            entries: Entries {
                conservative: 0.0,
                moderate: 0.0,
                aggressive: 0.0,
            },
            stop_loss: StopLoss {
                tight: 0.0,
                normal: 0.0,
                wide: 0.0,
            },
            targets: Targets {
                primary: 0.0,
                secondary: 0.0,
                final_target: 0.0,
            },
            timeframe: "Medium-term".to_string(),
            rationale: vec!["Insufficient data for a reliable strategy; holding".to_string()],
        }
    }
}

/// Inputs consumed by the strategy generator.
///
/// `trend` and `market_phase` are free text ("bullish", "Bull Market",
/// "Distribution", ...) and are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategySnapshot {
    pub current_price: Option<f64>,
    pub rsi: f64,
    pub macd: MacdIndicator,
    pub trend: String,
    /// 0.0 - 1.0
    pub trend_strength: f64,
    pub market_phase: String,
    /// 0.0 - 1.0
    pub market_strength: f64,
    /// Annualized volatility in percent.
    pub volatility: f64,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
}

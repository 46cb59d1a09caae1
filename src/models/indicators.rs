use serde::{Deserialize, Serialize};

use crate::models::market::MarketPhaseKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub value: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdIndicator {
    pub fn is_bullish(&self) -> bool {
        self.histogram > 0.0
    }

    pub fn is_bearish(&self) -> bool {
        self.histogram < 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObvTrend {
    Bullish,
    Bearish,
}

impl ObvTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObvTrend::Bullish => "Bullish",
            ObvTrend::Bearish => "Bearish",
        }
    }
}

/// Snapshot of every indicator computed for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalIndicators {
    pub current_price: f64,
    pub price_change_24h: f64,
    pub rsi: f64,
    pub stoch_rsi: f64,
    pub macd: MacdIndicator,
    pub ma20: f64,
    pub ma50: f64,
    pub ma200: f64,
    /// Last volume divided by the recent average volume.
    pub volume_change: f64,
    pub obv_trend: ObvTrend,
    pub market_phase: MarketPhaseKind,
    /// Annualized volatility in percent.
    pub volatility: f64,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
}

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketPhaseKind {
    #[serde(rename = "Bull Market")]
    BullMarket,
    #[serde(rename = "Bear Market")]
    BearMarket,
    Correction,
    Accumulation,
}

impl MarketPhaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketPhaseKind::BullMarket => "Bull Market",
            MarketPhaseKind::BearMarket => "Bear Market",
            MarketPhaseKind::Correction => "Correction",
            MarketPhaseKind::Accumulation => "Accumulation",
        }
    }
}

impl fmt::Display for MarketPhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyLevels {
    pub strong_support: f64,
    pub support: f64,
    pub pivot: f64,
    pub resistance: f64,
    pub strong_resistance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPhase {
    pub phase: MarketPhaseKind,
    /// 0.0 - 1.0
    pub strength: f64,
    /// 0 - 100
    pub confidence: f64,
    pub key_levels: KeyLevels,
}

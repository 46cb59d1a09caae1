use serde::{Deserialize, Serialize};

/// Prediction horizon. Callers label these either 24H/7D/30D or
/// Short/Mid/Long; both sets mean the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    Short,
    Mid,
    Long,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Short, Timeframe::Mid, Timeframe::Long];

    pub fn horizon_label(&self) -> &'static str {
        match self {
            Timeframe::Short => "24H",
            Timeframe::Mid => "7D",
            Timeframe::Long => "30D",
        }
    }

    pub fn term_label(&self) -> &'static str {
        match self {
            Timeframe::Short => "Short-term",
            Timeframe::Mid => "Mid-term",
            Timeframe::Long => "Long-term",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTarget {
    pub low: f64,
    pub high: f64,
    pub confidence: f64,
}

impl PriceTarget {
    pub fn contains(&self, price: f64) -> bool {
        self.low <= price && price <= self.high
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTargets {
    pub short_term: PriceTarget,
    pub mid_term: PriceTarget,
    pub long_term: PriceTarget,
}

impl PriceTargets {
    pub fn get(&self, timeframe: Timeframe) -> &PriceTarget {
        match timeframe {
            Timeframe::Short => &self.short_term,
            Timeframe::Mid => &self.mid_term,
            Timeframe::Long => &self.long_term,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw history handed over by the market-data layer.
///
/// `prices` and `volumes` are chronological and aligned index-for-index.
/// `timestamps` is optional; when present it must line up with `prices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalSeries {
    pub prices: Vec<f64>,
    pub volumes: Vec<f64>,
    pub current_price: f64,
    pub price_change_24h: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timestamps: Vec<DateTime<Utc>>,
}

impl HistoricalSeries {
    /// Build a series whose current price is the last close.
    pub fn new(prices: Vec<f64>, volumes: Vec<f64>) -> Self {
        let current_price = prices.last().copied().unwrap_or(0.0);
        let price_change_24h = match prices.len() {
            n if n >= 2 && prices[n - 2] != 0.0 => {
                (prices[n - 1] - prices[n - 2]) / prices[n - 2] * 100.0
            }
            _ => 0.0,
        };
        Self {
            prices,
            volumes,
            current_price,
            price_change_24h,
            timestamps: Vec::new(),
        }
    }

    pub fn with_timestamps(mut self, timestamps: Vec<DateTime<Utc>>) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn with_current_price(mut self, current_price: f64) -> Self {
        self.current_price = current_price;
        self
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Prices paired with their timestamps. Empty when no timestamps were supplied.
    pub fn price_points(&self) -> Vec<PricePoint> {
        self.timestamps
            .iter()
            .zip(&self.prices)
            .map(|(timestamp, price)| PricePoint {
                timestamp: *timestamp,
                price: *price,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

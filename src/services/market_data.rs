//! Historical market data interface.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use crate::models::series::HistoricalSeries;
use crate::services::error::ProviderError;

#[async_trait]
pub trait HistoricalDataProvider: Send + Sync {
    /// Get `days` of chronological price/volume history for a symbol
    async fn fetch_history(&self, symbol: &str, days: u32) -> Result<HistoricalSeries, ProviderError>;
}

/// Reads a `HistoricalSeries` JSON document from disk.
pub struct FileHistoryProvider {
    path: PathBuf,
}

impl FileHistoryProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl HistoricalDataProvider for FileHistoryProvider {
    async fn fetch_history(&self, symbol: &str, days: u32) -> Result<HistoricalSeries, ProviderError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let mut series: HistoricalSeries = serde_json::from_str(&raw)?;

        let keep = days as usize;
        if keep > 0 && series.prices.len() > keep {
            let skip = series.prices.len() - keep;
            series.prices.drain(..skip);
            series.volumes.drain(..skip.min(series.volumes.len()));
            if !series.timestamps.is_empty() {
                series.timestamps.drain(..skip.min(series.timestamps.len()));
            }
        }

        debug!(
            symbol = %symbol,
            count = series.prices.len(),
            path = %self.path.display(),
            "Loaded history from file"
        );
        Ok(series)
    }
}

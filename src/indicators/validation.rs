//! Series preprocessing: validation and return derivation.

use crate::indicators::error::SeriesError;
use crate::models::series::HistoricalSeries;

/// Check that a series can be fed to the indicator library.
///
/// Prices must be finite and positive, volumes finite and non-negative,
/// both the same length, and timestamps (when supplied) strictly increasing.
pub fn validate_series(series: &HistoricalSeries) -> Result<(), SeriesError> {
    if series.prices.is_empty() {
        return Err(SeriesError::Empty);
    }
    if series.prices.len() != series.volumes.len() {
        return Err(SeriesError::LengthMismatch {
            prices: series.prices.len(),
            volumes: series.volumes.len(),
        });
    }
    if let Some((index, &value)) = series
        .prices
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p <= 0.0)
    {
        return Err(SeriesError::InvalidPrice { index, value });
    }
    if let Some((index, &value)) = series
        .volumes
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        return Err(SeriesError::InvalidVolume { index, value });
    }
    if !series.timestamps.is_empty() {
        if series.timestamps.len() != series.prices.len() {
            return Err(SeriesError::TimestampMismatch {
                timestamps: series.timestamps.len(),
                prices: series.prices.len(),
            });
        }
        if let Some(index) = series
            .timestamps
            .windows(2)
            .position(|pair| pair[1] <= pair[0])
        {
            return Err(SeriesError::NotChronological { index: index + 1 });
        }
    }
    Ok(())
}

impl HistoricalSeries {
    pub fn validate(&self) -> Result<(), SeriesError> {
        validate_series(self)
    }
}

/// `ln(p[i] / p[i-1])` for each consecutive pair.
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect()
}

/// `(p[i] - p[i-1]) / p[i-1]` for each consecutive pair.
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
}

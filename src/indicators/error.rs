//! Series validation errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("price series is empty")]
    Empty,

    #[error("prices and volumes differ in length: {prices} prices, {volumes} volumes")]
    LengthMismatch { prices: usize, volumes: usize },

    #[error("timestamps do not line up with prices: {timestamps} timestamps, {prices} prices")]
    TimestampMismatch { timestamps: usize, prices: usize },

    #[error("invalid price {value} at index {index}")]
    InvalidPrice { index: usize, value: f64 },

    #[error("invalid volume {value} at index {index}")]
    InvalidVolume { index: usize, value: f64 },

    #[error("timestamps are not strictly increasing at index {index}")]
    NotChronological { index: usize },
}

//! Cryptoscope: technical-indicator and strategy-scoring engine.
//!
//! The pipeline runs top to bottom: series preprocessing, indicator
//! library, market-phase classification and confidence scoring, price
//! targets, then the strategy recommendation. Each stage produces new
//! values; nothing is shared between analysis requests.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod predictions;
pub mod services;
pub mod signals;
pub mod strategies;

pub use crate::core::{analyze_series, AnalysisEngine, AnalysisError, AnalysisReport};
pub use config::EngineConfig;

//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod prediction;
pub mod sentiment;
pub mod series;
pub mod signal;
pub mod strategy;

pub use indicators::{MacdIndicator, ObvTrend, TechnicalIndicators};
pub use market::{KeyLevels, MarketPhase, MarketPhaseKind};
pub use prediction::{PriceTarget, PriceTargets, Timeframe};
pub use sentiment::{HeadlineSentiment, MarketMood, NewsHeadline, NewsSentiment};
pub use series::{HistoricalSeries, PricePoint};
pub use signal::Signal;
pub use strategy::{
    Entries, Recommendation, StopLoss, StrategySnapshot, Targets, TradingStrategy,
};

//! External collaborators: market data, news/sentiment and the AI narrative.

pub mod cache;
pub mod error;
pub mod market_data;
pub mod narrative;
pub mod sentiment;

pub use cache::{CachedHistoryProvider, ResponseCache};
pub use error::ProviderError;
pub use market_data::{FileHistoryProvider, HistoricalDataProvider};
pub use narrative::{market_summary, parse_narrative, render_prompt, NarrativeGenerator, ParsedNarrative};
pub use sentiment::{
    score_headlines, HeadlineSentimentProvider, NeutralSentimentProvider, NewsProvider,
    SentimentProvider, StaticNewsProvider,
};

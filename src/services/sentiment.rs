//! News/sentiment interfaces and the headline bag-of-words heuristic.

use async_trait::async_trait;

use crate::models::sentiment::{HeadlineSentiment, MarketMood, NewsHeadline, NewsSentiment};
use crate::services::error::ProviderError;

#[async_trait]
pub trait SentimentProvider: Send + Sync {
    async fn fetch_sentiment(&self, symbol: &str) -> Result<NewsSentiment, ProviderError>;
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn fetch_headlines(&self, symbol: &str) -> Result<Vec<NewsHeadline>, ProviderError>;
}

/// Always answers 50/50/Neutral.
pub struct NeutralSentimentProvider;

#[async_trait]
impl SentimentProvider for NeutralSentimentProvider {
    async fn fetch_sentiment(&self, _symbol: &str) -> Result<NewsSentiment, ProviderError> {
        Ok(NewsSentiment::neutral())
    }
}

/// Serves a fixed headline list, e.g. one loaded alongside a series file.
pub struct StaticNewsProvider {
    headlines: Vec<NewsHeadline>,
}

impl StaticNewsProvider {
    pub fn new(headlines: Vec<NewsHeadline>) -> Self {
        Self { headlines }
    }
}

#[async_trait]
impl NewsProvider for StaticNewsProvider {
    async fn fetch_headlines(&self, _symbol: &str) -> Result<Vec<NewsHeadline>, ProviderError> {
        Ok(self.headlines.clone())
    }
}

/// Derives sentiment by scoring the headlines of a news provider.
pub struct HeadlineSentimentProvider<N> {
    news: N,
}

impl<N: NewsProvider> HeadlineSentimentProvider<N> {
    pub fn new(news: N) -> Self {
        Self { news }
    }
}

#[async_trait]
impl<N: NewsProvider> SentimentProvider for HeadlineSentimentProvider<N> {
    async fn fetch_sentiment(&self, symbol: &str) -> Result<NewsSentiment, ProviderError> {
        let headlines = self.news.fetch_headlines(symbol).await?;
        Ok(score_headlines(&headlines))
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "surge", "surges", "soar", "soars", "rally", "rallies", "gain", "gains", "bull", "bullish",
    "rise", "rises", "record", "high", "growth", "adoption", "approve", "approved", "approval",
    "breakout", "partnership", "upgrade", "boost", "jumps", "climbs",
];

const NEGATIVE_WORDS: &[&str] = &[
    "crash", "crashes", "plunge", "plunges", "drop", "drops", "fall", "falls", "bear", "bearish",
    "decline", "declines", "hack", "hacked", "ban", "banned", "lawsuit", "fraud", "fear", "loss",
    "losses", "selloff", "dump", "slump", "warning",
];

/// Classify one headline by keyword hits. An explicit label wins.
pub fn classify_headline(headline: &NewsHeadline) -> HeadlineSentiment {
    if let Some(label) = headline.sentiment {
        return label;
    }

    let lowered = headline.title.to_lowercase();
    let (mut positive, mut negative) = (0usize, 0usize);
    for word in lowered.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
        if POSITIVE_WORDS.contains(&word) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&word) {
            negative += 1;
        }
    }

    if positive > negative {
        HeadlineSentiment::Positive
    } else if negative > positive {
        HeadlineSentiment::Negative
    } else {
        HeadlineSentiment::Neutral
    }
}

/// Score = 50 + 50 * (positive - negative) / total. No headlines is neutral.
pub fn score_headlines(headlines: &[NewsHeadline]) -> NewsSentiment {
    if headlines.is_empty() {
        return NewsSentiment::neutral();
    }

    let (positive, negative) = headlines.iter().fold((0i64, 0i64), |(p, n), h| {
        match classify_headline(h) {
            HeadlineSentiment::Positive => (p + 1, n),
            HeadlineSentiment::Negative => (p, n + 1),
            HeadlineSentiment::Neutral => (p, n),
        }
    });

    let score = 50.0 + 50.0 * (positive - negative) as f64 / headlines.len() as f64;
    let mood = if score > 60.0 {
        MarketMood::Bullish
    } else if score < 40.0 {
        MarketMood::Bearish
    } else {
        MarketMood::Neutral
    };

    NewsSentiment::new(score, score, mood)
}

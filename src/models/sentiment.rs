use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketMood {
    Bullish,
    Bearish,
    Neutral,
}

/// Sentiment signal supplied by the news layer. Scores are 0 - 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSentiment {
    pub news_score: Option<f64>,
    pub social_score: Option<f64>,
    pub market_mood: MarketMood,
}

impl NewsSentiment {
    pub fn new(news_score: f64, social_score: f64, market_mood: MarketMood) -> Self {
        Self {
            news_score: Some(news_score),
            social_score: Some(social_score),
            market_mood,
        }
    }

    /// 50/50/Neutral, used whenever sentiment is unavailable.
    pub fn neutral() -> Self {
        Self::new(50.0, 50.0, MarketMood::Neutral)
    }
}

impl Default for NewsSentiment {
    fn default() -> Self {
        Self::neutral()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadlineSentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsHeadline {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<HeadlineSentiment>,
}

impl NewsHeadline {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sentiment: None,
        }
    }

    pub fn with_sentiment(mut self, sentiment: HeadlineSentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }
}

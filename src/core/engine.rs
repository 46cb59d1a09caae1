//! Async analysis engine wiring the external collaborators to the pipeline.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::EngineConfig;
use crate::core::analysis::{analyze_series, AnalysisError, AnalysisReport};
use crate::models::sentiment::{NewsHeadline, NewsSentiment};
use crate::services::market_data::HistoricalDataProvider;
use crate::services::narrative::{parse_narrative, render_prompt, NarrativeGenerator};
use crate::services::sentiment::{NewsProvider, SentimentProvider};

/// Engine holding the providers for one deployment.
///
/// Each call to [`AnalysisEngine::analyze`] builds its own values; the
/// engine keeps no per-request state.
pub struct AnalysisEngine {
    config: EngineConfig,
    history: Arc<dyn HistoricalDataProvider>,
    sentiment: Arc<dyn SentimentProvider>,
    news: Option<Arc<dyn NewsProvider>>,
    narrator: Option<Arc<dyn NarrativeGenerator>>,
}

impl AnalysisEngine {
    pub fn new(
        config: EngineConfig,
        history: Arc<dyn HistoricalDataProvider>,
        sentiment: Arc<dyn SentimentProvider>,
    ) -> Self {
        Self {
            config,
            history,
            sentiment,
            news: None,
            narrator: None,
        }
    }

    pub fn with_news(mut self, news: Arc<dyn NewsProvider>) -> Self {
        self.news = Some(news);
        self
    }

    pub fn with_narrator(mut self, narrator: Arc<dyn NarrativeGenerator>) -> Self {
        self.narrator = Some(narrator);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze a symbol end to end.
    ///
    /// A failed history fetch aborts the analysis. Sentiment falls back to
    /// neutral, headlines to none, and the narrative to the numeric summary.
    pub async fn analyze(&self, symbol: &str) -> Result<AnalysisReport, AnalysisError> {
        info!(symbol = %symbol, days = self.config.history_days, "Starting analysis");

        let series = self
            .history
            .fetch_history(symbol, self.config.history_days)
            .await
            .map_err(|source| {
                error!(symbol = %symbol, error = %source, "History fetch failed");
                AnalysisError::Upstream {
                    symbol: symbol.to_string(),
                    source,
                }
            })?;

        let (sentiment, headlines) =
            tokio::join!(self.fetch_sentiment(symbol), self.fetch_headlines(symbol));

        let mut report = analyze_series(symbol, &series, &sentiment, &headlines, &self.config)?;

        if let Some(narrator) = &self.narrator {
            let prompt = render_prompt(symbol, &report.indicators, &report.sentiment);
            match narrator.generate(&prompt).await {
                Ok(text) => match parse_narrative(&text) {
                    Some(parsed) => {
                        report.summary = parsed.summary.clone();
                        report.narrative = Some(parsed);
                    }
                    None => warn!(symbol = %symbol, "Narrative did not follow the template, using numeric summary"),
                },
                Err(e) => warn!(symbol = %symbol, error = %e, "Narrative generation failed, using numeric summary"),
            }
        }

        Ok(report)
    }

    async fn fetch_sentiment(&self, symbol: &str) -> NewsSentiment {
        match self.sentiment.fetch_sentiment(symbol).await {
            Ok(sentiment) => sentiment,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Sentiment fetch failed, using neutral sentiment");
                NewsSentiment::neutral()
            }
        }
    }

    async fn fetch_headlines(&self, symbol: &str) -> Vec<NewsHeadline> {
        let Some(news) = &self.news else {
            return Vec::new();
        };
        match news.fetch_headlines(symbol).await {
            Ok(headlines) => headlines,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Headline fetch failed, continuing without news");
                Vec::new()
            }
        }
    }
}

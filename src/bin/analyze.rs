//! Cryptoscope analyzer
//!
//! Usage: analyze <series.json> [symbol] [headlines.json]
//!
//! Runs the full analysis over a history file and prints the report as
//! JSON. Without a headlines file, sentiment is neutral.

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use cryptoscope::config::{get_environment, EngineConfig};
use cryptoscope::logging;
use cryptoscope::models::sentiment::NewsHeadline;
use cryptoscope::services::{
    CachedHistoryProvider, FileHistoryProvider, HeadlineSentimentProvider,
    NeutralSentimentProvider, SentimentProvider, StaticNewsProvider,
};
use cryptoscope::AnalysisEngine;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding the historical price/volume series
    series: PathBuf,

    /// Symbol reported in the analysis
    #[arg(default_value = "BTC")]
    symbol: String,

    /// Optional JSON list of news headlines used for sentiment
    headlines: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {
        series: series_path,
        symbol,
        headlines: headlines_path,
    } = Args::parse();

    dotenv().ok();
    logging::init_logging();

    let config = EngineConfig::from_env();
    info!(environment = %get_environment(), symbol = %symbol, "Starting Cryptoscope analyzer");

    let history = CachedHistoryProvider::new(
        FileHistoryProvider::new(series_path),
        config.cache_ttl,
        config.min_request_interval,
    );

    let engine = match headlines_path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(&path).await?;
            let headlines: Vec<NewsHeadline> = serde_json::from_str(&raw)?;
            info!(count = headlines.len(), "Loaded headlines");
            let sentiment: Arc<dyn SentimentProvider> = Arc::new(HeadlineSentimentProvider::new(
                StaticNewsProvider::new(headlines.clone()),
            ));
            AnalysisEngine::new(config, Arc::new(history), sentiment)
                .with_news(Arc::new(StaticNewsProvider::new(headlines)))
        }
        None => AnalysisEngine::new(config, Arc::new(history), Arc::new(NeutralSentimentProvider)),
    };

    match engine.analyze(&symbol).await {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Analysis failed");
            Err(e.into())
        }
    }
}

//! Unit tests for the headline sentiment heuristic

use cryptoscope::models::sentiment::{HeadlineSentiment, MarketMood, NewsHeadline};
use cryptoscope::services::sentiment::{
    classify_headline, score_headlines, HeadlineSentimentProvider, SentimentProvider,
    StaticNewsProvider,
};

#[test]
fn test_classify_by_keywords() {
    assert_eq!(
        classify_headline(&NewsHeadline::new("Bitcoin surges to record high")),
        HeadlineSentiment::Positive
    );
    assert_eq!(
        classify_headline(&NewsHeadline::new("Exchange hacked, prices plunge")),
        HeadlineSentiment::Negative
    );
    assert_eq!(
        classify_headline(&NewsHeadline::new("Developers meet in Lisbon")),
        HeadlineSentiment::Neutral
    );
}

#[test]
fn test_explicit_label_wins() {
    let headline = NewsHeadline::new("Bitcoin surges").with_sentiment(HeadlineSentiment::Negative);
    assert_eq!(classify_headline(&headline), HeadlineSentiment::Negative);
}

#[test]
fn test_empty_headlines_are_neutral() {
    let sentiment = score_headlines(&[]);
    assert_eq!(sentiment.news_score, Some(50.0));
    assert_eq!(sentiment.social_score, Some(50.0));
    assert_eq!(sentiment.market_mood, MarketMood::Neutral);
}

#[test]
fn test_score_headlines() {
    let headlines = vec![
        NewsHeadline::new("ETF approval boosts rally"),
        NewsHeadline::new("Adoption climbs in Asia"),
        NewsHeadline::new("Regulator warning on leverage"),
        NewsHeadline::new("Conference schedule announced"),
    ];
    let sentiment = score_headlines(&headlines);
    // 50 + 50 * (2 - 1) / 4
    assert_eq!(sentiment.news_score, Some(62.5));
    assert_eq!(sentiment.market_mood, MarketMood::Bullish);
}

#[test]
fn test_headline_provider_scores_news() {
    let provider = HeadlineSentimentProvider::new(StaticNewsProvider::new(vec![
        NewsHeadline::new("Market crash deepens"),
        NewsHeadline::new("Miners face losses"),
    ]));
    let sentiment = tokio_test::block_on(provider.fetch_sentiment("BTC")).unwrap();
    assert_eq!(sentiment.news_score, Some(0.0));
    assert_eq!(sentiment.market_mood, MarketMood::Bearish);
}

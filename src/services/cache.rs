//! Instance-scoped response cache and rate-limited history provider.

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::models::series::HistoricalSeries;
use crate::services::error::ProviderError;
use crate::services::market_data::HistoricalDataProvider;

/// String-keyed cache whose entries expire after a fixed TTL.
pub struct ResponseCache<T> {
    ttl: Duration,
    entries: HashMap<String, (Instant, T)>,
}

impl<T: Clone> ResponseCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Fresh value for `key`. An expired entry is removed.
    pub fn get(&mut self, key: &str) -> Option<T> {
        match self.entries.get(key) {
            Some((stored, value)) if stored.elapsed() < self.ttl => Some(value.clone()),
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), (Instant::now(), value));
    }

    /// Drop every expired entry, returning how many were removed.
    pub fn evict_expired(&mut self) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, (stored, _)| stored.elapsed() < ttl);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Wraps a provider with a TTL cache and a minimum gap between upstream calls.
///
/// Cache hits never touch the limiter. A zero interval disables it.
pub struct CachedHistoryProvider<P> {
    inner: P,
    cache: Mutex<ResponseCache<HistoricalSeries>>,
    limiter: Option<DefaultDirectRateLimiter>,
}

impl<P: HistoricalDataProvider> CachedHistoryProvider<P> {
    pub fn new(inner: P, ttl: Duration, min_interval: Duration) -> Self {
        let limiter = Quota::with_period(min_interval).map(DefaultDirectRateLimiter::direct);
        Self {
            inner,
            cache: Mutex::new(ResponseCache::new(ttl)),
            limiter,
        }
    }
}

#[async_trait]
impl<P: HistoricalDataProvider> HistoricalDataProvider for CachedHistoryProvider<P> {
    async fn fetch_history(&self, symbol: &str, days: u32) -> Result<HistoricalSeries, ProviderError> {
        let key = format!("{}:{}", symbol, days);
        if let Some(series) = self.cache.lock().await.get(&key) {
            debug!(symbol = %symbol, "History cache hit");
            return Ok(series);
        }

        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
        let series = self.inner.fetch_history(symbol, days).await?;

        let mut cache = self.cache.lock().await;
        cache.evict_expired();
        cache.insert(key, series.clone());
        Ok(series)
    }
}

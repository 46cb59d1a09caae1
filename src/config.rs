//! Runtime configuration for the analysis engine.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Returns the deployment environment (`APP_ENV`), defaulting to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|v| v.trim().to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Indicator periods and networking-wrapper limits.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub rsi_period: usize,
    pub stoch_rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub volume_period: usize,
    pub ma_short: usize,
    pub ma_mid: usize,
    pub ma_long: usize,
    /// Number of daily points requested from the history provider.
    pub history_days: u32,
    pub cache_ttl: Duration,
    pub min_request_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            stoch_rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            volume_period: 20,
            ma_short: 20,
            ma_mid: 50,
            ma_long: 200,
            history_days: 200,
            cache_ttl: Duration::from_secs(300),
            min_request_interval: Duration::from_millis(1200),
        }
    }
}

impl EngineConfig {
    /// Build a config from `CRYPTOSCOPE_*` environment variables.
    ///
    /// Missing variables keep their defaults; unparsable ones are logged
    /// and ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rsi_period: read_var("CRYPTOSCOPE_RSI_PERIOD", defaults.rsi_period),
            stoch_rsi_period: read_var("CRYPTOSCOPE_STOCH_RSI_PERIOD", defaults.stoch_rsi_period),
            macd_fast: read_var("CRYPTOSCOPE_MACD_FAST", defaults.macd_fast),
            macd_slow: read_var("CRYPTOSCOPE_MACD_SLOW", defaults.macd_slow),
            macd_signal: read_var("CRYPTOSCOPE_MACD_SIGNAL", defaults.macd_signal),
            volume_period: read_var("CRYPTOSCOPE_VOLUME_PERIOD", defaults.volume_period),
            ma_short: read_var("CRYPTOSCOPE_MA_SHORT", defaults.ma_short),
            ma_mid: read_var("CRYPTOSCOPE_MA_MID", defaults.ma_mid),
            ma_long: read_var("CRYPTOSCOPE_MA_LONG", defaults.ma_long),
            history_days: read_var("CRYPTOSCOPE_HISTORY_DAYS", defaults.history_days),
            cache_ttl: Duration::from_secs(read_var(
                "CRYPTOSCOPE_CACHE_TTL_SECS",
                defaults.cache_ttl.as_secs(),
            )),
            min_request_interval: Duration::from_millis(read_var(
                "CRYPTOSCOPE_MIN_REQUEST_INTERVAL_MS",
                defaults.min_request_interval.as_millis() as u64,
            )),
        }
    }
}

fn read_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(key = key, value = %raw, "Ignoring unparsable config value");
                default
            }
        },
        Err(_) => default,
    }
}

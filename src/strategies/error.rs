use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrategyError {
    #[error("invalid current price: {0:?}")]
    InvalidPrice(Option<f64>),

    #[error("non-finite value for {0}")]
    NonFinite(&'static str),
}

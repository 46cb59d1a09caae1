use thiserror::Error;

/// Failures reported by external collaborators.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("no data for {0}")]
    NotFound(String),

    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

use serde::{Deserialize, Serialize};

/// One indicator reading with its human-readable interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub indicator: String,
    pub value: f64,
    pub interpretation: String,
    /// 0.0 - 1.0
    pub strength: f64,
}

impl Signal {
    pub fn new(indicator: &str, value: f64, interpretation: impl Into<String>, strength: f64) -> Self {
        Self {
            indicator: indicator.to_string(),
            value,
            interpretation: interpretation.into(),
            strength: strength.clamp(0.0, 1.0),
        }
    }
}

//! Review conversation configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Review conversation configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewConfig {
    /// Longest wait for a customer's answer in seconds. Unset waits forever.
    pub read_timeout_secs: Option<u64>,

    /// Sentiment analyzer implementation
    #[serde(default)]
    pub analyzer: AnalyzerKind,

    /// Response generator implementation
    #[serde(default)]
    pub generator: GeneratorKind,
}

/// Available sentiment analyzers
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    /// Scores by text length
    #[default]
    Length,
    /// Counts positive and negative words
    Lexicon,
}

/// Available response generators
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Affirming or apologetic fixed reply
    #[default]
    Binary,
    /// Positive, neutral or negative reply naming the product
    Graded,
}

impl ReviewConfig {
    /// Get read timeout as Duration
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }

    /// Validate review configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.read_timeout_secs == Some(0) {
            return Err(ValidationError::InvalidReadTimeout);
        }
        Ok(())
    }
}

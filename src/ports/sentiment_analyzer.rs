//! Sentiment Analyzer Port - scores free-text customer reviews.
//!
//! Any implementation can be plugged into the review conversation. The
//! engine treats every failure as fatal for the running session.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for sentiment scoring.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Scores `text`.
    ///
    /// Must produce a result for any input, including the empty string.
    async fn process(&self, text: &str) -> Result<SentimentAnalysisResult, AnalysisError>;
}

/// Outcome of scoring one review.
///
/// Positive means positive sentiment, negative means negative, zero is
/// neutral. The range is defined by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentimentAnalysisResult {
    pub sentiment_score: i64,
}

impl SentimentAnalysisResult {
    pub fn new(sentiment_score: i64) -> Self {
        Self { sentiment_score }
    }

    pub fn is_positive(&self) -> bool {
        self.sentiment_score > 0
    }

    pub fn is_negative(&self) -> bool {
        self.sentiment_score < 0
    }
}

/// Errors raised by a sentiment analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("sentiment analyzer unavailable: {0}")]
    Unavailable(String),

    #[error("sentiment analysis failed: {0}")]
    Failed(String),
}

//! Response Generator Port - produces the reply sent after each review.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SentimentAnalysisResult;

/// Port for generating a reply from a sentiment score.
///
/// From the engine's point of view this is a pure function of its inputs.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Generates a reply for `sentiment`, with `context` describing what was
    /// reviewed (the product name).
    async fn generate(
        &self,
        sentiment: &SentimentAnalysisResult,
        context: &str,
    ) -> Result<ResponseGeneratorResult, GenerationError>;
}

/// A generated reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseGeneratorResult {
    pub response: String,
}

impl ResponseGeneratorResult {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

/// Errors raised by a response generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("response generator unavailable: {0}")]
    Unavailable(String),

    #[error("response generation failed: {0}")]
    Failed(String),
}

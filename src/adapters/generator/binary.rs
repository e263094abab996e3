//! Binary response generator: a strictly positive score gets an affirming
//! reply, anything else an apologetic one.

use async_trait::async_trait;

use crate::ports::{
    GenerationError, ResponseGenerator, ResponseGeneratorResult, SentimentAnalysisResult,
};

pub const POSITIVE_REPLY: &str = "Happy to hear that!";
pub const NEGATIVE_REPLY: &str = "Sorry to hear that.";

#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryResponseGenerator;

impl BinaryResponseGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResponseGenerator for BinaryResponseGenerator {
    async fn generate(
        &self,
        sentiment: &SentimentAnalysisResult,
        _context: &str,
    ) -> Result<ResponseGeneratorResult, GenerationError> {
        let reply = if sentiment.is_positive() {
            POSITIVE_REPLY
        } else {
            NEGATIVE_REPLY
        };
        Ok(ResponseGeneratorResult::new(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn reply(score: i64) -> String {
        BinaryResponseGenerator::new()
            .generate(&SentimentAnalysisResult::new(score), "Tyre")
            .await
            .unwrap()
            .response
    }

    #[tokio::test]
    async fn positive_score_is_affirmed() {
        assert_eq!(reply(1).await, "Happy to hear that!");
        assert_eq!(reply(42).await, "Happy to hear that!");
    }

    #[tokio::test]
    async fn zero_and_negative_scores_get_apology() {
        assert_eq!(reply(0).await, "Sorry to hear that.");
        assert_eq!(reply(-1).await, "Sorry to hear that.");
    }
}

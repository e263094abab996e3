//! Graded response generator: separate replies for positive, neutral and
//! negative reviews, each naming the product.

use async_trait::async_trait;

use crate::ports::{
    GenerationError, ResponseGenerator, ResponseGeneratorResult, SentimentAnalysisResult,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct GradedResponseGenerator;

impl GradedResponseGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResponseGenerator for GradedResponseGenerator {
    async fn generate(
        &self,
        sentiment: &SentimentAnalysisResult,
        context: &str,
    ) -> Result<ResponseGeneratorResult, GenerationError> {
        let product = if context.trim().is_empty() {
            "your purchase"
        } else {
            context
        };

        let reply = if sentiment.is_positive() {
            format!("Happy to hear you enjoy {}!", product)
        } else if sentiment.is_negative() {
            format!(
                "Sorry to hear that {} did not meet your expectations. We will pass this on.",
                product
            )
        } else {
            format!("Thanks for sharing your thoughts on {}.", product)
        };

        Ok(ResponseGeneratorResult::new(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn reply(score: i64, context: &str) -> String {
        GradedResponseGenerator::new()
            .generate(&SentimentAnalysisResult::new(score), context)
            .await
            .unwrap()
            .response
    }

    #[tokio::test]
    async fn replies_differ_by_polarity() {
        assert_eq!(reply(2, "Roof box").await, "Happy to hear you enjoy Roof box!");
        assert_eq!(
            reply(0, "Roof box").await,
            "Thanks for sharing your thoughts on Roof box."
        );
        assert!(reply(-3, "Roof box")
            .await
            .starts_with("Sorry to hear that Roof box did not meet"));
    }

    #[tokio::test]
    async fn blank_context_falls_back_to_generic_noun() {
        assert_eq!(reply(1, "  ").await, "Happy to hear you enjoy your purchase!");
    }
}

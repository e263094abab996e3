//! Length heuristic analyzer.
//!
//! Scores a review `len % 3 - 1`, giving -1, 0 or +1. It carries no notion of
//! sentiment; it exists so the service runs without a language model.

use async_trait::async_trait;

use crate::ports::{AnalysisError, SentimentAnalysisResult, SentimentAnalyzer};

#[derive(Debug, Clone, Copy, Default)]
pub struct LengthHeuristicAnalyzer;

impl LengthHeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn score(text: &str) -> i64 {
        (text.len() % 3) as i64 - 1
    }
}

#[async_trait]
impl SentimentAnalyzer for LengthHeuristicAnalyzer {
    async fn process(&self, text: &str) -> Result<SentimentAnalysisResult, AnalysisError> {
        Ok(SentimentAnalysisResult::new(Self::score(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scores_by_byte_length_modulo_three() {
        let analyzer = LengthHeuristicAnalyzer::new();
        assert_eq!(analyzer.process("").await.unwrap().sentiment_score, -1);
        assert_eq!(analyzer.process("a").await.unwrap().sentiment_score, 0);
        assert_eq!(analyzer.process("ab").await.unwrap().sentiment_score, 1);
        assert_eq!(analyzer.process("abc").await.unwrap().sentiment_score, -1);
    }

    #[tokio::test]
    async fn counts_bytes_not_characters() {
        // "é" is two bytes
        let analyzer = LengthHeuristicAnalyzer::new();
        assert_eq!(analyzer.process("é").await.unwrap().sentiment_score, 1);
    }
}

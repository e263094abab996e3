//! Lexicon-based sentiment analyzer.
//!
//! Counts positive words minus negative words. A negator ("not", "never", ...)
//! flips the polarity of the word directly after it.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::ports::{AnalysisError, SentimentAnalysisResult, SentimentAnalyzer};

static POSITIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "good", "great", "excellent", "amazing", "awesome", "love", "loved", "like", "liked",
        "perfect", "perfectly", "happy", "fantastic", "nice", "recommend", "works", "fits",
        "quality", "fast", "easy", "best", "satisfied", "wonderful", "solid", "reliable",
    ]
    .into_iter()
    .collect()
});

static NEGATIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bad", "poor", "terrible", "awful", "hate", "hated", "broken", "broke", "worst",
        "disappointed", "disappointing", "useless", "slow", "cheap", "faulty", "defective",
        "wrong", "late", "damaged", "horrible", "leaks", "noisy", "refund", "return",
    ]
    .into_iter()
    .collect()
});

static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["not", "no", "never", "hardly", "dont", "don't", "didn't", "didnt", "isn't", "isnt"]
        .into_iter()
        .collect()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentimentAnalyzer;

impl LexiconSentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn score(text: &str) -> i64 {
        let lowered = text.to_lowercase();
        let mut score = 0;
        let mut negate = false;

        for word in lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty())
        {
            if NEGATORS.contains(word) {
                negate = true;
                continue;
            }

            let polarity = if POSITIVE.contains(word) {
                1
            } else if NEGATIVE.contains(word) {
                -1
            } else {
                0
            };
            score += if negate { -polarity } else { polarity };
            negate = false;
        }

        score
    }
}

#[async_trait]
impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    async fn process(&self, text: &str) -> Result<SentimentAnalysisResult, AnalysisError> {
        Ok(SentimentAnalysisResult::new(Self::score(text)))
    }
}

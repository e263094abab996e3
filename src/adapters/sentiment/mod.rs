//! Sentiment analyzer adapters.
//!
//! - `LengthHeuristicAnalyzer` - deterministic stand-in scoring by text length
//! - `LexiconSentimentAnalyzer` - counts positive and negative words

mod length_heuristic;
mod lexicon;

pub use length_heuristic::LengthHeuristicAnalyzer;
pub use lexicon::LexiconSentimentAnalyzer;

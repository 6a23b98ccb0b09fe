//! # Sentiment Module
//!
//! Polarity scoring and three-way sentiment classification.

mod classifier;
mod lexicon;

pub use classifier::{Sentiment, SentimentClassifier, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use lexicon::{LexiconScorer, PolarityScorer};

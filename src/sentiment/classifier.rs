//! # Sentiment Classifier
//!
//! Maps a polarity score onto the three-way sentiment label used throughout
//! the pipeline.

use super::lexicon::{LexiconScorer, PolarityScorer};
use serde::Serialize;
use std::fmt;

/// Scores above this are classified Positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Scores below this are classified Negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Sentiment label for one comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Convert a polarity score in [-1, 1] to a label.
    ///
    /// The thresholds are fixed constants; a score of exactly 0.0 (including
    /// the empty-text case) is Neutral.
    pub fn from_polarity(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier wrapping a pluggable polarity scorer
pub struct SentimentClassifier {
    scorer: Box<dyn PolarityScorer>,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier {
    /// Create a classifier backed by the bundled lexicon scorer
    pub fn new() -> Self {
        Self::with_scorer(Box::new(LexiconScorer::new()))
    }

    /// Create a classifier with a custom polarity scorer
    pub fn with_scorer(scorer: Box<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    /// Classify one normalized comment.
    ///
    /// Deterministic: the label is a pure function of the text under the
    /// configured scorer.
    pub fn classify(&self, normalized_text: &str) -> Sentiment {
        Sentiment::from_polarity(self.scorer.polarity(normalized_text))
    }
}

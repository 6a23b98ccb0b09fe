//! # Analyzed Comments
//!
//! The per-run comment collection and its sentiment distribution.

use crate::sentiment::{Sentiment, SentimentClassifier};
use crate::text::CommentNormalizer;
use chrono::{DateTime, Utc};

/// One comment after normalization and classification.
///
/// Immutable once created; the sentiment label is a pure function of the
/// normalized text under the classifier's fixed thresholds.
#[derive(Debug, Clone)]
pub struct AnalyzedComment {
    /// Raw comment text as fetched
    pub text: String,
    /// Normalized text used for classification and keyword counting
    pub normalized: String,
    /// Sentiment label
    pub sentiment: Sentiment,
}

/// Ordered collection of analyzed comments for one run
#[derive(Debug, Clone)]
pub struct CommentSet {
    comments: Vec<AnalyzedComment>,
    analyzed_at: DateTime<Utc>,
}

impl CommentSet {
    /// Normalize and classify a batch of raw comments.
    ///
    /// Order of the input is preserved.
    pub fn analyze(
        raw_comments: Vec<String>,
        normalizer: &CommentNormalizer,
        classifier: &SentimentClassifier,
    ) -> Self {
        let comments = raw_comments
            .into_iter()
            .map(|text| {
                let normalized = normalizer.normalize(&text);
                let sentiment = classifier.classify(&normalized);
                AnalyzedComment {
                    text,
                    normalized,
                    sentiment,
                }
            })
            .collect();

        Self {
            comments,
            analyzed_at: Utc::now(),
        }
    }

    /// Number of analyzed comments
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Whether the set holds no comments
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Analyzed comments in fetch order
    pub fn comments(&self) -> &[AnalyzedComment] {
        &self.comments
    }

    /// Iterate over analyzed comments
    pub fn iter(&self) -> impl Iterator<Item = &AnalyzedComment> {
        self.comments.iter()
    }

    /// When the analysis ran
    pub fn analyzed_at(&self) -> DateTime<Utc> {
        self.analyzed_at
    }

    /// Count comments per sentiment label
    pub fn distribution(&self) -> SentimentDistribution {
        let mut distribution = SentimentDistribution::default();
        for comment in &self.comments {
            match comment.sentiment {
                Sentiment::Positive => distribution.positive += 1,
                Sentiment::Neutral => distribution.neutral += 1,
                Sentiment::Negative => distribution.negative += 1,
            }
        }
        distribution
    }
}

/// Comment counts per sentiment label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentDistribution {
    /// Total number of comments counted
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Count for one label
    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Fraction of comments with the label, in [0, 1].
    ///
    /// Returns 0.0 for an empty distribution.
    pub fn share(&self, sentiment: Sentiment) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(sentiment) as f64 / total as f64
        }
    }
}

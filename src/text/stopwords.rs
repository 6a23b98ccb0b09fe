//! # Stopwords
//!
//! Stopword membership used by the keyword aggregator.

use std::collections::HashSet;

/// Capability interface for stopword membership.
///
/// Keeps keyword counting independent of any particular word list.
pub trait StopwordSet {
    /// Check whether a token is a stopword
    fn is_stopword(&self, word: &str) -> bool;
}

/// Common English stopwords
const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "must", "shall", "can", "need", "dare",
    "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by",
    "from", "as", "into", "through", "during", "before", "after",
    "above", "below", "between", "under", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how", "all",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "just",
    "and", "but", "if", "or", "because", "until", "while", "although",
    "this", "that", "these", "those", "i", "me", "my", "myself", "we",
    "our", "ours", "ourselves", "you", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs",
    "themselves", "what", "which", "who", "whom", "am", "dont", "cant",
    "didnt", "doesnt", "isnt", "wasnt", "youre", "ive", "im",
];

/// Bundled English stopword list
pub struct EnglishStopwords {
    words: HashSet<&'static str>,
}

impl Default for EnglishStopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishStopwords {
    /// Create the bundled stopword set
    pub fn new() -> Self {
        Self {
            words: ENGLISH_STOPWORDS.iter().copied().collect(),
        }
    }

    /// Number of words in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopwordSet for EnglishStopwords {
    fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }
}

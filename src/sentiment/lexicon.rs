//! # Polarity Lexicon
//!
//! Rule-based polarity scoring over a general-English word lexicon with
//! negation and intensifier handling.

use std::collections::{HashMap, HashSet};

/// Capability interface for polarity scoring.
///
/// Implementations map text to a score in [-1, 1]. A score of 0.0 means no
/// opinion could be formed; empty text always scores 0.0. Implementations
/// must be deterministic so classification is repeatable.
pub trait PolarityScorer {
    /// Score text polarity in [-1, 1]
    fn polarity(&self, text: &str) -> f64;
}

/// Lexicon-based polarity scorer
///
/// Expects normalized (lowercased, punctuation-free) input, though lookups
/// lowercase tokens anyway.
pub struct LexiconScorer {
    /// Word to polarity score mapping
    words: HashMap<String, f64>,
    /// Negation words (flip the sign of the next sentiment word)
    negations: HashSet<String>,
    /// Intensifier words (scale the next sentiment word)
    intensifiers: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Create a scorer with the bundled general-English lexicon
    pub fn new() -> Self {
        let positive_words = [
            ("love", 0.6),
            ("loved", 0.6),
            ("like", 0.3),
            ("liked", 0.3),
            ("great", 0.8),
            ("good", 0.5),
            ("awesome", 0.9),
            ("amazing", 0.8),
            ("excellent", 0.9),
            ("perfect", 0.9),
            ("fantastic", 0.9),
            ("wonderful", 0.8),
            ("incredible", 0.8),
            ("brilliant", 0.8),
            ("beautiful", 0.7),
            ("best", 0.8),
            ("better", 0.4),
            ("favorite", 0.6),
            ("favourite", 0.6),
            ("fun", 0.5),
            ("funny", 0.5),
            ("hilarious", 0.7),
            ("nice", 0.5),
            ("cool", 0.4),
            ("enjoy", 0.5),
            ("enjoyed", 0.5),
            ("helpful", 0.6),
            ("thanks", 0.4),
            ("thank", 0.4),
            ("wow", 0.4),
            ("masterpiece", 0.9),
            ("underrated", 0.4),
            ("legend", 0.6),
            ("legendary", 0.7),
            ("banger", 0.7),
            ("goat", 0.7),
            ("happy", 0.6),
            ("glad", 0.5),
            ("impressive", 0.7),
            ("recommend", 0.5),
            ("quality", 0.4),
            ("classic", 0.5),
            ("win", 0.4),
            ("epic", 0.6),
        ];

        let negative_words = [
            ("hate", -0.8),
            ("hated", -0.8),
            ("terrible", -0.9),
            ("awful", -0.9),
            ("horrible", -0.9),
            ("worst", -0.9),
            ("bad", -0.6),
            ("worse", -0.6),
            ("boring", -0.6),
            ("trash", -0.8),
            ("garbage", -0.8),
            ("annoying", -0.6),
            ("disappointing", -0.7),
            ("disappointed", -0.7),
            ("stupid", -0.7),
            ("dumb", -0.6),
            ("waste", -0.6),
            ("wasted", -0.6),
            ("clickbait", -0.5),
            ("overrated", -0.5),
            ("fake", -0.5),
            ("scam", -0.9),
            ("fraud", -0.9),
            ("wrong", -0.4),
            ("sad", -0.4),
            ("ugly", -0.6),
            ("poor", -0.5),
            ("mess", -0.5),
            ("misleading", -0.6),
            ("cringe", -0.6),
            ("lame", -0.5),
            ("pathetic", -0.7),
            ("useless", -0.7),
            ("nonsense", -0.5),
            ("unwatchable", -0.8),
            ("fail", -0.6),
            ("disgusting", -0.8),
            ("ruined", -0.7),
        ];

        let mut words = HashMap::new();
        for (word, score) in positive_words {
            words.insert(word.to_string(), score);
        }
        for (word, score) in negative_words {
            words.insert(word.to_string(), score);
        }

        let negations: HashSet<String> = [
            "not", "no", "never", "neither", "nobody", "nothing", "nowhere",
            "none", "cannot", "cant", "dont", "doesnt", "didnt", "wont",
            "wouldnt", "shouldnt", "couldnt", "isnt", "arent", "wasnt",
            "werent", "hardly", "barely", "scarcely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let intensifiers: HashMap<String, f64> = [
            ("very", 1.5),
            ("extremely", 2.0),
            ("really", 1.3),
            ("absolutely", 1.8),
            ("totally", 1.5),
            ("so", 1.3),
            ("incredibly", 1.8),
            ("super", 1.5),
            ("slightly", 0.5),
            ("somewhat", 0.7),
            ("kinda", 0.7),
            ("pretty", 1.2),
        ]
        .into_iter()
        .map(|(word, mult)| (word.to_string(), mult))
        .collect();

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Get the polarity of a single word
    pub fn word_score(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check whether a word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    /// Get intensifier multiplier for a word
    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(&word.to_lowercase()).copied()
    }

    /// Add a custom word to the lexicon
    pub fn add_word(&mut self, word: &str, score: f64) {
        self.words.insert(word.to_lowercase(), score);
    }
}

impl PolarityScorer for LexiconScorer {
    /// Score text as the mean of matched word scores.
    ///
    /// A negation flips the sign of the next sentiment word; an intensifier
    /// scales it. Both reset after any non-sentiment word. The result is
    /// clamped to [-1, 1]; text with no sentiment words scores 0.0.
    fn polarity(&self, text: &str) -> f64 {
        let mut scores: Vec<f64> = Vec::new();
        let mut negate_next = false;
        let mut intensity: f64 = 1.0;

        for word in text.split_whitespace() {
            let word_lower = word.to_lowercase();

            if self.is_negation(&word_lower) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.intensifier(&word_lower) {
                intensity = mult;
                continue;
            }

            if let Some(mut score) = self.word_score(&word_lower) {
                if negate_next {
                    score = -score;
                    negate_next = false;
                }
                score *= intensity;
                intensity = 1.0;
                scores.push(score);
            } else {
                negate_next = false;
                intensity = 1.0;
            }
        }

        if scores.is_empty() {
            0.0
        } else {
            (scores.iter().sum::<f64>() / scores.len() as f64).clamp(-1.0, 1.0)
        }
    }
}

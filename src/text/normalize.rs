//! # Comment Normalization
//!
//! Text cleaning applied to every raw comment before classification and
//! keyword counting.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Normalizer for raw comment text
pub struct CommentNormalizer {
    /// Regex for URL removal
    url_regex: Regex,
    /// Regex for characters outside ASCII letters/digits/whitespace
    symbol_regex: Regex,
    /// Regex for whitespace runs
    whitespace_regex: Regex,
}

impl Default for CommentNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self {
            url_regex: Regex::new(r"https?://\S+|www\.\S+").unwrap(),
            symbol_regex: Regex::new(r"[^A-Za-z0-9\s]+").unwrap(),
            whitespace_regex: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Normalize one comment.
    ///
    /// Steps:
    /// 1. Unicode normalization (NFC)
    /// 2. Remove URL-like substrings
    /// 3. Remove characters outside ASCII letters/digits/whitespace
    /// 4. Convert to lowercase
    /// 5. Collapse whitespace runs and trim
    ///
    /// Total and pure; normalizing an already-normalized string returns it
    /// unchanged.
    pub fn normalize(&self, text: &str) -> String {
        let composed: String = text.nfc().collect();

        let no_urls = self.url_regex.replace_all(&composed, "");
        let ascii_only = self.symbol_regex.replace_all(&no_urls, "");
        let lowercase = ascii_only.to_lowercase();
        let collapsed = self.whitespace_regex.replace_all(&lowercase, " ");

        collapsed.trim().to_string()
    }
}
